/// Declares a fieldless catalogue enum stored as a `SMALLINT`.
///
/// Generated impls: `Display` (variant name), `FromStr` (variant name ignoring
/// case and `_`/`-`/space separators, or the numeric discriminant) and
/// `TryFrom<i16>`.
macro_rules! catalogue_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident as $kind:literal {
            $( $(#[$vmeta:meta])* $variant:ident = $code:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $code, )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_i16(self) -> i16 {
                self as i16
            }

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => stringify!($variant),)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl TryFrom<i16> for $name {
            type Error = $crate::error::ModelError;

            fn try_from(value: i16) -> Result<Self, Self::Error> {
                match value {
                    $($code => Ok($name::$variant),)+
                    other => Err($crate::error::ModelError::UnknownVariant {
                        kind: $kind,
                        value: other.to_string(),
                    }),
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::error::ModelError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                let trimmed = value.trim();
                if let Ok(code) = trimmed.parse::<i16>() {
                    return $name::try_from(code);
                }

                let normalized: String = trimmed
                    .chars()
                    .filter(|c| !matches!(c, '_' | '-' | ' '))
                    .collect();

                $name::ALL
                    .iter()
                    .copied()
                    .find(|variant| variant.as_str().eq_ignore_ascii_case(&normalized))
                    .ok_or_else(|| $crate::error::ModelError::UnknownVariant {
                        kind: $kind,
                        value: trimmed.to_string(),
                    })
            }
        }
    };
}
