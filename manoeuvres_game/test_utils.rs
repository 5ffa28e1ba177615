use manoeuvres_types::{
    battle::{CommittedForce, CommittedFortification},
    common::{
        Faction, ForceId, ForceRitualId, FortificationId, FortificationRitualId, NationId, OrderId,
        QualityId, Side,
    },
    forces::{ForceDef, FortificationDef, NationDef, QualityDef},
    orders::{NationOrderRule, OrderAvailability, OrderDef, OrderEffect},
    rituals::{ForceRitualDef, FortificationRitualDef},
};

use crate::catalog::RuleBook;

pub const NATION_HIGHGUARD: u32 = 1;
pub const NATION_DRUJ: u32 = 2;
pub const NATION_WINTERMARK: u32 = 7;

pub const QUALITY_NONE: u32 = 1;
pub const QUALITY_HEALERS: u32 = 2;

pub const ORDER_OVERWHELM: u32 = 1;
pub const ORDER_HOLD_THE_LINE: u32 = 2;
pub const ORDER_WHATEVER_IT_TAKES: u32 = 3;
pub const ORDER_FIRE_IN_THE_BLOOD: u32 = 4;
pub const ORDER_CRUEL: u32 = 5;
pub const ORDER_TEND_THE_FALLEN: u32 = 6;
pub const ORDER_LAY_LOW: u32 = 7;
pub const ORDER_STORM_THE_WALLS: u32 = 8;
pub const ORDER_STRATEGIC_DEFENCE: u32 = 9;
pub const ORDER_OUTMANOUVERE: u32 = 10;
pub const ORDER_PRESS_THE_ATTACK: u32 = 11;
pub const ORDER_SENT_HOME: u32 = 42;

pub const FORCE_IMPERIAL_LEGION: u32 = 1;
pub const FORCE_IMPERIAL_HOST: u32 = 2;
pub const FORCE_DRUJ_RAIDERS: u32 = 3;
pub const FORCE_DRUJ_HORDE: u32 = 4;
pub const FORCE_WINTERMARK_WARBAND: u32 = 5;
pub const FORCE_IMPERIAL_NAVY: u32 = 6;

pub const FORTIFICATION_STOCKADE: u32 = 1;
pub const FORTIFICATION_FORTRESS: u32 = 6;

pub const STRENGTH_RITUAL: u32 = 1;
pub const DECISIVE_RITUAL: u32 = 2;
pub const NAVY_RITUAL: u32 = 3;
pub const STONE_SKIN_RITUAL: u32 = 1;

#[derive(Default, Clone)]
pub struct OrderFactoryOptions<'a> {
    pub id: Option<u32>,
    pub name: Option<&'a str>,
    pub offensive: Option<bool>,
    pub casualties_inflicted_modifier: Option<f64>,
    pub casualties_suffered_modifier: Option<f64>,
    pub territory_claimed_modifier: Option<f64>,
    pub territory_defence_modifier: Option<f64>,
    pub effect: Option<OrderEffect>,
}

#[derive(Default, Clone)]
pub struct ForceFactoryOptions<'a> {
    pub id: Option<u32>,
    pub name: Option<&'a str>,
    pub is_army: Option<bool>,
    pub nation_id: Option<u32>,
    pub quality_id: Option<u32>,
    pub large: Option<bool>,
}

#[derive(Default, Clone)]
pub struct FortificationFactoryOptions<'a> {
    pub id: Option<u32>,
    pub name: Option<&'a str>,
    pub maximum_strength: Option<u32>,
    pub held_by: Option<Side>,
}

#[derive(Default, Clone)]
pub struct ForceRitualFactoryOptions<'a> {
    pub id: Option<u32>,
    pub name: Option<&'a str>,
    pub army_ritual: Option<bool>,
    pub effective_strength_modifier: Option<i32>,
    pub decisive: Option<bool>,
}

#[derive(Default, Clone)]
pub struct CommittedForceFactoryOptions {
    pub side: Option<Side>,
    pub slot: Option<usize>,
    pub force_id: Option<u32>,
    pub order_id: Option<u32>,
    pub ritual_id: Option<u32>,
    pub strength: Option<u32>,
}

#[derive(Default, Clone)]
pub struct CommittedFortificationFactoryOptions {
    pub side: Option<Side>,
    pub slot: Option<usize>,
    pub fortification_id: Option<u32>,
    pub ritual_id: Option<u32>,
    pub strength: Option<u32>,
    pub besieged: Option<bool>,
}

pub fn order_factory(options: OrderFactoryOptions) -> OrderDef {
    let id = options.id.unwrap_or(1);

    OrderDef {
        id: OrderId(id),
        name: options
            .name
            .map_or_else(|| format!("Order {id}"), |s| s.to_string()),
        offensive: options.offensive.unwrap_or(true),
        casualties_inflicted_modifier: options.casualties_inflicted_modifier.unwrap_or(0.0),
        casualties_suffered_modifier: options.casualties_suffered_modifier.unwrap_or(0.0),
        territory_claimed_modifier: options.territory_claimed_modifier.unwrap_or(0.0),
        territory_defence_modifier: options.territory_defence_modifier.unwrap_or(0.0),
        effect: options.effect.unwrap_or_default(),
    }
}

pub fn force_factory(options: ForceFactoryOptions) -> ForceDef {
    let id = options.id.unwrap_or(1);

    ForceDef {
        id: ForceId(id),
        name: options
            .name
            .map_or_else(|| format!("Force {id}"), |s| s.to_string()),
        is_army: options.is_army.unwrap_or(true),
        nation_id: NationId(options.nation_id.unwrap_or(NATION_HIGHGUARD)),
        quality_id: QualityId(options.quality_id.unwrap_or(QUALITY_NONE)),
        large: options.large.unwrap_or(false),
    }
}

pub fn fortification_factory(options: FortificationFactoryOptions) -> FortificationDef {
    let id = options.id.unwrap_or(1);

    FortificationDef {
        id: FortificationId(id),
        name: options
            .name
            .map_or_else(|| format!("Fortification {id}"), |s| s.to_string()),
        level: 1,
        maximum_strength: options.maximum_strength.unwrap_or(2000),
        held_by: options.held_by.unwrap_or(Side::Imperial),
    }
}

pub fn force_ritual_factory(options: ForceRitualFactoryOptions) -> ForceRitualDef {
    let id = options.id.unwrap_or(1);

    ForceRitualDef {
        id: ForceRitualId(id),
        name: options
            .name
            .map_or_else(|| format!("Ritual {id}"), |s| s.to_string()),
        army_ritual: options.army_ritual.unwrap_or(true),
        quality_id: None,
        effective_strength_modifier: options.effective_strength_modifier.unwrap_or(0),
        decisive: options.decisive.unwrap_or(false),
    }
}

pub fn committed_force_factory(options: CommittedForceFactoryOptions) -> CommittedForce {
    CommittedForce {
        side: options.side.unwrap_or(Side::Imperial),
        slot: options.slot.unwrap_or(0),
        force_id: ForceId(options.force_id.unwrap_or(FORCE_IMPERIAL_LEGION)),
        order_id: options.order_id.map(OrderId),
        ritual_id: options.ritual_id.map(ForceRitualId),
        declared_strength: options.strength.unwrap_or(5000),
    }
}

pub fn committed_fortification_factory(
    options: CommittedFortificationFactoryOptions,
) -> CommittedFortification {
    CommittedFortification {
        side: options.side.unwrap_or(Side::Barbarian),
        slot: options.slot.unwrap_or(0),
        fortification_id: FortificationId(
            options.fortification_id.unwrap_or(FORTIFICATION_STOCKADE),
        ),
        ritual_id: options.ritual_id.map(FortificationRitualId),
        declared_strength: options.strength.unwrap_or(2000),
        besieged: options.besieged.unwrap_or(true),
    }
}

fn order(id: u32, name: &str, offensive: bool, effect: OrderEffect) -> OrderDef {
    order_factory(OrderFactoryOptions {
        id: Some(id),
        name: Some(name),
        offensive: Some(offensive),
        effect: Some(effect),
        ..Default::default()
    })
}

/// A small but complete rule book covering every order effect.
pub fn rule_book_factory() -> RuleBook {
    let nation = |id: u32, name: &str, faction: Faction| NationDef {
        id: NationId(id),
        name: name.to_string(),
        faction,
    };
    let force = |id: u32, name: &str, nation_id: u32, large: bool| {
        force_factory(ForceFactoryOptions {
            id: Some(id),
            name: Some(name),
            nation_id: Some(nation_id),
            large: Some(large),
            ..Default::default()
        })
    };

    RuleBook::new()
        .with_nation(nation(NATION_HIGHGUARD, "Highguard", Faction::Empire))
        .with_nation(nation(NATION_DRUJ, "Druj", Faction::Barbarian))
        .with_nation(nation(NATION_WINTERMARK, "Wintermark", Faction::Empire))
        .with_quality(QualityDef {
            id: QualityId(QUALITY_NONE),
            name: "None".to_string(),
            orders: vec![],
        })
        .with_quality(QualityDef {
            id: QualityId(QUALITY_HEALERS),
            name: "Healers".to_string(),
            orders: vec![OrderId(ORDER_TEND_THE_FALLEN)],
        })
        .with_order(order_factory(OrderFactoryOptions {
            id: Some(ORDER_OVERWHELM),
            name: Some("Overwhelm"),
            offensive: Some(true),
            territory_claimed_modifier: Some(0.2),
            ..Default::default()
        }))
        .with_order(order_factory(OrderFactoryOptions {
            id: Some(ORDER_HOLD_THE_LINE),
            name: Some("Hold the Line"),
            offensive: Some(false),
            territory_defence_modifier: Some(0.1),
            ..Default::default()
        }))
        .with_order(order(
            ORDER_WHATEVER_IT_TAKES,
            "Whatever it Takes",
            true,
            OrderEffect::AlwaysBoostCasualties,
        ))
        .with_order(order(
            ORDER_FIRE_IN_THE_BLOOD,
            "Fire in the Blood",
            true,
            OrderEffect::BoostCasualtiesForOffensiveAllies,
        ))
        .with_order(order(ORDER_CRUEL, "Cruel", true, OrderEffect::Harsh))
        .with_order(order(
            ORDER_TEND_THE_FALLEN,
            "Tend the Fallen",
            false,
            OrderEffect::Mercy,
        ))
        .with_order(order(ORDER_LAY_LOW, "Lay Low", false, OrderEffect::LayLow))
        .with_order(order(
            ORDER_STORM_THE_WALLS,
            "Storm the Walls",
            true,
            OrderEffect::Siege,
        ))
        .with_order(order(
            ORDER_STRATEGIC_DEFENCE,
            "Strategic Defence",
            false,
            OrderEffect::Disciplined,
        ))
        .with_order(order(
            ORDER_OUTMANOUVERE,
            "Outmanouvere",
            true,
            OrderEffect::Skirmishing,
        ))
        .with_order(order_factory(OrderFactoryOptions {
            id: Some(ORDER_PRESS_THE_ATTACK),
            name: Some("Press the Attack"),
            offensive: Some(true),
            casualties_inflicted_modifier: Some(0.5),
            casualties_suffered_modifier: Some(0.5),
            ..Default::default()
        }))
        .with_order(order(ORDER_SENT_HOME, "Sent Home", false, OrderEffect::Exempt))
        .with_force(force(FORCE_IMPERIAL_LEGION, "Imperial Legion", NATION_HIGHGUARD, false))
        .with_force(force(FORCE_IMPERIAL_HOST, "Imperial Host", NATION_HIGHGUARD, true))
        .with_force(force(FORCE_DRUJ_RAIDERS, "Druj Raiders", NATION_DRUJ, false))
        .with_force(force(FORCE_DRUJ_HORDE, "Druj Horde", NATION_DRUJ, true))
        .with_force(force_factory(ForceFactoryOptions {
            id: Some(FORCE_WINTERMARK_WARBAND),
            name: Some("Wintermark Warband"),
            nation_id: Some(NATION_WINTERMARK),
            quality_id: Some(QUALITY_HEALERS),
            ..Default::default()
        }))
        .with_force(force_factory(ForceFactoryOptions {
            id: Some(FORCE_IMPERIAL_NAVY),
            name: Some("Imperial Navy"),
            is_army: Some(false),
            nation_id: Some(NATION_HIGHGUARD),
            ..Default::default()
        }))
        .with_fortification(fortification_factory(FortificationFactoryOptions {
            id: Some(FORTIFICATION_STOCKADE),
            name: Some("Orc Stockade"),
            maximum_strength: Some(2000),
            held_by: Some(Side::Barbarian),
        }))
        .with_fortification(fortification_factory(FortificationFactoryOptions {
            id: Some(FORTIFICATION_FORTRESS),
            name: Some("Imperial Fortress"),
            maximum_strength: Some(5000),
            held_by: Some(Side::Imperial),
        }))
        .with_force_ritual(force_ritual_factory(ForceRitualFactoryOptions {
            id: Some(STRENGTH_RITUAL),
            name: Some("Strength of the Bear"),
            effective_strength_modifier: Some(500),
            ..Default::default()
        }))
        .with_force_ritual(force_ritual_factory(ForceRitualFactoryOptions {
            id: Some(DECISIVE_RITUAL),
            name: Some("Decisive Victory"),
            decisive: Some(true),
            ..Default::default()
        }))
        .with_force_ritual(force_ritual_factory(ForceRitualFactoryOptions {
            id: Some(NAVY_RITUAL),
            name: Some("Fair Winds"),
            army_ritual: Some(false),
            effective_strength_modifier: Some(300),
            ..Default::default()
        }))
        .with_fortification_ritual(FortificationRitualDef {
            id: FortificationRitualId(STONE_SKIN_RITUAL),
            name: "Stone Skin".to_string(),
            effective_strength_modifier: 1000,
        })
        .with_availability(OrderAvailability {
            standard: [ORDER_OVERWHELM, ORDER_HOLD_THE_LINE, ORDER_CRUEL, ORDER_LAY_LOW]
                .into_iter()
                .map(OrderId)
                .collect(),
            nations: vec![NationOrderRule {
                nation_id: NationId(NATION_WINTERMARK),
                grants: vec![OrderId(ORDER_OUTMANOUVERE)],
                revokes: vec![OrderId(ORDER_LAY_LOW)],
            }],
            imperial_only: vec![OrderId(ORDER_CRUEL)],
        })
}
