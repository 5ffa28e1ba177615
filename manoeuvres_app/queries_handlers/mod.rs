mod get_available_orders;
mod get_force_options;
mod get_fortification_options;
mod get_fortification_ritual_options;
mod get_fortification_strength;
mod get_ritual_options;
mod resolve_battle;

pub use get_available_orders::GetAvailableOrdersHandler;
pub use get_force_options::GetForceOptionsHandler;
pub use get_fortification_options::GetFortificationOptionsHandler;
pub use get_fortification_ritual_options::GetFortificationRitualOptionsHandler;
pub use get_fortification_strength::GetFortificationStrengthHandler;
pub use get_ritual_options::GetRitualOptionsHandler;
pub use resolve_battle::ResolveBattleHandler;
