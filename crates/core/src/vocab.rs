//! Closed vocabularies shared between the server and the browser client.
//!
//! Each vocabulary is a fieldless enum whose JSON form is the upper-case
//! wire string (`"GET"`, `"API_KEY"`, ...). Unknown strings are rejected,
//! never coerced. The enums derive [`ts_rs::TS`] so the client's type
//! definitions are generated from this file.

use crate::error::CoreError;

/// Declares a closed vocabulary enum with its wire strings.
///
/// Generates `ALL`, `as_str`, `Display`, `FromStr` and `TryFrom<String>`
/// (the latter lets sqlx decode `TEXT` columns straight into the enum).
macro_rules! closed_vocabulary {
    (
        $(#[$meta:meta])*
        $name:ident($label:tt) {
            $( $(#[$vmeta:meta])* $variant:ident => $text:tt ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash,
            serde::Serialize, serde::Deserialize, ts_rs::TS,
        )]
        #[ts(export)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $text)]
                $variant,
            )+
        }

        impl $name {
            /// Every value, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The wire string for this value.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok($name::$variant),)+
                    other => Err(CoreError::Validation(format!(
                        "Invalid {} '{other}'. Must be one of: {}",
                        $label,
                        $name::ALL
                            .iter()
                            .map(|v| v.as_str())
                            .collect::<Vec<_>>()
                            .join(", ")
                    ))),
                }
            }
        }

        impl TryFrom<String> for $name {
            type Error = CoreError;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                s.parse()
            }
        }
    };
}

closed_vocabulary! {
    /// HTTP method of a documented route.
    RouteType("route type") {
        Get => "GET",
        Post => "POST",
    }
}

closed_vocabulary! {
    /// Authorization scheme a documented route expects.
    #[derive(Default)]
    AuthorizationType("authorization type") {
        #[default]
        None => "NONE",
        ApiKey => "API_KEY",
        Bearer => "BEARER",
        Basic => "BASIC",
        Digest => "DIGEST",
        Oauth1 => "OAUTH1",
        Oauth2 => "OAUTH2",
    }
}

closed_vocabulary! {
    /// Role of a model within its route. Every route has one of each.
    ModelType("model type") {
        Argument => "ARGUMENT",
        Response => "RESPONSE",
    }
}

closed_vocabulary! {
    /// Scalar type of a model field.
    FieldType("field type") {
        String => "STRING",
        Int => "INT",
        Float => "FLOAT",
        Boolean => "BOOLEAN",
        Date => "DATE",
        Json => "JSON",
    }
}

closed_vocabulary! {
    /// Display/parse hint attached to a field.
    #[derive(Default)]
    FieldFormat("field format") {
        #[default]
        None => "NONE",
        Email => "EMAIL",
        Url => "URL",
        Uuid => "UUID",
        Cuid => "CUID",
        Datetime => "DATETIME",
        Ipv4 => "IPV4",
        Ipv6 => "IPV6",
    }
}
