//! Serde helpers shared by configuration types

/// Implements `Deserialize` for a fieldless enum, matching its spellings case-insensitively.
///
/// Each variant lists one or more lowercase spellings:
/// ```ignore
/// impl_case_insensitive_deserialize!(
///     Mocker,
///     Mockito => ["mockito"],
///     MockK => ["mockk", "mock-k"]
/// );
/// ```
#[macro_export]
macro_rules! impl_case_insensitive_deserialize {
    ($enum_type:ty, $($variant:ident => [$($spelling:expr),+ $(,)?]),+ $(,)?) => {
        impl<'de> serde::Deserialize<'de> for $enum_type {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = <String as serde::Deserialize>::deserialize(deserializer)?;
                let lowered = s.to_lowercase();
                $(
                    if [$($spelling),+].contains(&lowered.as_str()) {
                        return ::core::result::Result::Ok(Self::$variant);
                    }
                )+
                let expected: Vec<&str> = vec![$($($spelling),+),+];
                ::core::result::Result::Err(serde::de::Error::custom(format!(
                    "unknown variant '{}', expected one of: {}",
                    s,
                    expected.join(", ")
                )))
            }
        }
    };
}
