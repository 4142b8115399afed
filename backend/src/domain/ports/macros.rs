//! `define_port_error!`, the declaration macro behind every repository error.
//!
//! Each variant names its fields and a display message. The macro derives
//! `thiserror::Error` plus equality and adds one snake_case constructor per
//! variant whose arguments accept anything convertible into the field type:
//!
//! ```ignore
//! define_port_error! {
//!     /// Failures of the comment store.
//!     pub enum CommentRepositoryError {
//!         Connection { message: String } => "connection failed: {message}",
//!     }
//! }
//!
//! let err = CommentRepositoryError::connection("pool timed out");
//! ```
//!
//! Adapters build errors only through these constructors, which keeps the
//! `.into()` noise out of the persistence code.

macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident { $($field:ident : $ty:ty),+ $(,)? } => $message:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant { $($field: $ty),+ },
            )+
        }

        impl $name {
            $(
                ::paste::paste! {
                    #[doc = "Build a `" $variant "` error."]
                    pub fn [<$variant:snake>]($($field: impl Into<$ty>),+) -> Self {
                        Self::$variant { $($field: $field.into()),+ }
                    }
                }
            )+
        }
    };
}

pub(crate) use define_port_error;
