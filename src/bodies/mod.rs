mod rigid_body;

pub use rigid_body::RigidBody;
pub use body_flags::BodyFlags;

/// Behaviour flags for rigid bodies
pub mod body_flags {
    use bitflags::bitflags;

    bitflags! {
        /// Flags controlling how the simulation world treats a body
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct BodyFlags: u32 {
            /// The body is accelerated by world gravity
            const AFFECTED_BY_GRAVITY = 1 << 0;

            /// The body is treated as a particle and never rotates
            const PARTICLE = 1 << 1;
        }
    }

    impl Default for BodyFlags {
        fn default() -> Self {
            BodyFlags::AFFECTED_BY_GRAVITY
        }
    }
}
