//! Collision layer system for filtering perception queries
//!
//! Based on Game Engine Architecture 3rd Edition, Section 13.3.8:
//! "Most games need to filter collisions... This is typically done via
//! collision layers or groups."

use bitflags::bitflags;

bitflags! {
    /// Collision layer mask consumed by the perception port
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct LayerMask: u32 {
        /// Player character layer
        const PLAYER = 1 << 0;

        /// Enemy character layer
        const ENEMY = 1 << 1;

        /// Walkable ground geometry
        const GROUND = 1 << 2;

        /// Hazard (death-wall) trigger volumes
        const HAZARD = 1 << 3;

        /// Sun-piece pickups
        const PICKUP = 1 << 4;
    }
}
