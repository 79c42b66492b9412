//! `hook_event!`: declares a Pre/Post pair for one intercepted operation.
//!
//! ```ignore
//! hook_event! {
//!     /// Living entity takes damage.
//!     EntityDamagePre / EntityDamagePost {
//!         fixed { entity: EntityRef, cause: DamageCause }
//!         mutable { damage: f32 }
//!     }
//! }
//! ```
//!
//! `fixed` fields are private on both types and read through getters.
//! `mutable` fields are `pub` on the Pre type and getters on the Post type.
//! Constructors take fixed fields first, then mutable ones, in declaration order.
//!
//! Getters are inherent methods named after their field and shadow trait
//! methods of the same name, so no field may be called `from`, `into`, `name`
//! or `phase`. Use `origin` for where something started.

macro_rules! hook_event {
    (
        $(#[$meta:meta])*
        $pre:ident / $post:ident {
            fixed { $( $(#[$fmeta:meta])* $field:ident : $fty:ty ),* $(,)? }
            mutable { $( $(#[$mmeta:meta])* $mfield:ident : $mty:ty ),* $(,)? }
        }
    ) => {
        $(#[$meta])*
        ///
        /// Fired before the operation runs. Cancelling it suppresses the operation.
        #[derive(Debug, Clone)]
        pub struct $pre {
            $( $field: $fty, )*
            $( $(#[$mmeta])* pub $mfield: $mty, )*
            cancelled: bool,
        }

        impl $pre {
            #[allow(clippy::too_many_arguments)]
            pub fn new($( $field: $fty, )* $( $mfield: $mty, )*) -> Self {
                Self {
                    $( $field, )*
                    $( $mfield, )*
                    cancelled: false,
                }
            }

            $(
                $(#[$fmeta])*
                pub fn $field(&self) -> &$fty {
                    &self.$field
                }
            )*
        }

        impl $crate::Event for $pre {
            fn name(&self) -> &'static str {
                stringify!($pre)
            }

            fn phase(&self) -> $crate::Phase {
                $crate::Phase::Pre
            }

            fn is_cancelled(&self) -> bool {
                self.cancelled
            }
        }

        impl $crate::Cancellable for $pre {
            fn set_cancelled(&mut self, cancelled: bool) {
                self.cancelled = cancelled;
            }
        }

        $(#[$meta])*
        ///
        /// Fired after the operation completed, with the values actually applied.
        #[derive(Debug, Clone)]
        pub struct $post {
            $( $field: $fty, )*
            $( $mfield: $mty, )*
        }

        impl $post {
            #[allow(clippy::too_many_arguments)]
            pub fn new($( $field: $fty, )* $( $mfield: $mty, )*) -> Self {
                Self {
                    $( $field, )*
                    $( $mfield, )*
                }
            }

            $(
                $(#[$fmeta])*
                pub fn $field(&self) -> &$fty {
                    &self.$field
                }
            )*

            $(
                $(#[$mmeta])*
                pub fn $mfield(&self) -> &$mty {
                    &self.$mfield
                }
            )*
        }

        impl $crate::Event for $post {
            fn name(&self) -> &'static str {
                stringify!($post)
            }

            fn phase(&self) -> $crate::Phase {
                $crate::Phase::Post
            }
        }

        impl From<$pre> for $post {
            fn from(pre: $pre) -> Self {
                Self {
                    $( $field: pre.$field, )*
                    $( $mfield: pre.$mfield, )*
                }
            }
        }
    };
}
