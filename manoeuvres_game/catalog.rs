use std::collections::BTreeMap;

use manoeuvres_types::{
    common::{
        ForceId, ForceRitualId, FortificationId, FortificationRitualId, NationId, OrderId,
        QualityId,
    },
    errors::{BattleError, ReferenceKind},
    forces::{ForceDef, FortificationDef, NationDef, QualityDef},
    orders::{OrderAvailability, OrderDef},
    rituals::{ForceRitualDef, FortificationRitualDef},
};

/// Read-only lookups of the rule definitions a battle refers to.
///
/// Implementations must not change while a resolution is running.
pub trait RuleCatalog: Send + Sync {
    fn order(&self, id: OrderId) -> Result<&OrderDef, BattleError>;
    fn force(&self, id: ForceId) -> Result<&ForceDef, BattleError>;
    fn fortification(&self, id: FortificationId) -> Result<&FortificationDef, BattleError>;
    fn force_ritual(&self, id: ForceRitualId) -> Result<&ForceRitualDef, BattleError>;
    fn fortification_ritual(
        &self,
        id: FortificationRitualId,
    ) -> Result<&FortificationRitualDef, BattleError>;
    fn nation(&self, id: NationId) -> Result<&NationDef, BattleError>;
    fn quality(&self, id: QualityId) -> Result<&QualityDef, BattleError>;

    /// All forces, ordered by id.
    fn forces(&self) -> Vec<&ForceDef>;
    /// All fortifications, ordered by id.
    fn fortifications(&self) -> Vec<&FortificationDef>;
    fn force_rituals(&self) -> Vec<&ForceRitualDef>;
    fn fortification_rituals(&self) -> Vec<&FortificationRitualDef>;
    fn order_availability(&self) -> &OrderAvailability;
}

/// Immutable, pre-loaded snapshot of the rule catalog.
#[derive(Debug, Default, Clone)]
pub struct RuleBook {
    orders: BTreeMap<OrderId, OrderDef>,
    forces: BTreeMap<ForceId, ForceDef>,
    fortifications: BTreeMap<FortificationId, FortificationDef>,
    force_rituals: BTreeMap<ForceRitualId, ForceRitualDef>,
    fortification_rituals: BTreeMap<FortificationRitualId, FortificationRitualDef>,
    nations: BTreeMap<NationId, NationDef>,
    qualities: BTreeMap<QualityId, QualityDef>,
    availability: OrderAvailability,
}

impl RuleBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_order(mut self, order: OrderDef) -> Self {
        self.orders.insert(order.id, order);
        self
    }

    pub fn with_force(mut self, force: ForceDef) -> Self {
        self.forces.insert(force.id, force);
        self
    }

    pub fn with_fortification(mut self, fortification: FortificationDef) -> Self {
        self.fortifications.insert(fortification.id, fortification);
        self
    }

    pub fn with_force_ritual(mut self, ritual: ForceRitualDef) -> Self {
        self.force_rituals.insert(ritual.id, ritual);
        self
    }

    pub fn with_fortification_ritual(mut self, ritual: FortificationRitualDef) -> Self {
        self.fortification_rituals.insert(ritual.id, ritual);
        self
    }

    pub fn with_nation(mut self, nation: NationDef) -> Self {
        self.nations.insert(nation.id, nation);
        self
    }

    pub fn with_quality(mut self, quality: QualityDef) -> Self {
        self.qualities.insert(quality.id, quality);
        self
    }

    pub fn with_availability(mut self, availability: OrderAvailability) -> Self {
        self.availability = availability;
        self
    }

    pub fn orders(&self) -> impl Iterator<Item = &OrderDef> {
        self.orders.values()
    }

    pub fn nations(&self) -> impl Iterator<Item = &NationDef> {
        self.nations.values()
    }

    pub fn qualities(&self) -> impl Iterator<Item = &QualityDef> {
        self.qualities.values()
    }
}

fn lookup<'a, K: Ord + Copy + Into<u32>, V>(
    map: &'a BTreeMap<K, V>,
    kind: ReferenceKind,
    id: K,
) -> Result<&'a V, BattleError> {
    map.get(&id).ok_or_else(|| BattleError::not_found(kind, id))
}

impl RuleCatalog for RuleBook {
    fn order(&self, id: OrderId) -> Result<&OrderDef, BattleError> {
        lookup(&self.orders, ReferenceKind::Order, id)
    }

    fn force(&self, id: ForceId) -> Result<&ForceDef, BattleError> {
        lookup(&self.forces, ReferenceKind::Force, id)
    }

    fn fortification(&self, id: FortificationId) -> Result<&FortificationDef, BattleError> {
        lookup(&self.fortifications, ReferenceKind::Fortification, id)
    }

    fn force_ritual(&self, id: ForceRitualId) -> Result<&ForceRitualDef, BattleError> {
        lookup(&self.force_rituals, ReferenceKind::ForceRitual, id)
    }

    fn fortification_ritual(
        &self,
        id: FortificationRitualId,
    ) -> Result<&FortificationRitualDef, BattleError> {
        lookup(
            &self.fortification_rituals,
            ReferenceKind::FortificationRitual,
            id,
        )
    }

    fn nation(&self, id: NationId) -> Result<&NationDef, BattleError> {
        lookup(&self.nations, ReferenceKind::Nation, id)
    }

    fn quality(&self, id: QualityId) -> Result<&QualityDef, BattleError> {
        lookup(&self.qualities, ReferenceKind::Quality, id)
    }

    fn forces(&self) -> Vec<&ForceDef> {
        self.forces.values().collect()
    }

    fn fortifications(&self) -> Vec<&FortificationDef> {
        self.fortifications.values().collect()
    }

    fn force_rituals(&self) -> Vec<&ForceRitualDef> {
        self.force_rituals.values().collect()
    }

    fn fortification_rituals(&self) -> Vec<&FortificationRitualDef> {
        self.fortification_rituals.values().collect()
    }

    fn order_availability(&self) -> &OrderAvailability {
        &self.availability
    }
}
