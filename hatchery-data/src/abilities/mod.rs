mod ability_slot;

pub use ability_slot::AbilitySlot;
