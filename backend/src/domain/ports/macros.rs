//! Defines helper macros for generating domain port error enums.

macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        define_port_error!(@ctor_impl $variant () () $( $field : $ty, )*);
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) ) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) $field:ident : $ty:ty, $($rest:tt)*) => {
        define_port_error!(
            @ctor_impl
            $variant
            ($($params)* $field: impl Into<$ty>,)
            ($($inits)* $field: $field.into(),)
            $($rest)*
        );
    };
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $($field : $ty),* } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant $( { $($field : $ty),* } )?);
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    use crate::domain::UserId;

    define_port_error! {
        pub enum StorePortError {
            Unavailable => "store unavailable",
            Query { message: String } => "query failed: {message}",
            Missing { user_id: UserId } => "user {user_id} missing",
            Mixed { message: String, attempts: u32 } => "{message} after {attempts} attempts",
        }
    }

    #[test]
    fn unit_variants_get_constructors() {
        assert_eq!(StorePortError::unavailable(), StorePortError::Unavailable);
    }

    #[test]
    fn constructors_accept_str_for_string_fields() {
        let err = StorePortError::query("timeout");
        assert_eq!(err.to_string(), "query failed: timeout");
    }

    #[test]
    fn constructors_accept_domain_types() {
        let user_id = UserId::random();
        let err = StorePortError::missing(user_id);
        assert_eq!(err.to_string(), format!("user {user_id} missing"));
    }

    #[test]
    fn constructors_support_mixed_fields() {
        let err = StorePortError::mixed("gave up", 3_u32);
        assert_eq!(err.to_string(), "gave up after 3 attempts");
    }
}
