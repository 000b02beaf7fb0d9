use std::path::PathBuf;

/// Declares a config section whose fields have defaults and optional environment overrides
macro_rules! section {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {$(
            $(#[$field_meta:meta])*
            $field_vis:vis $field_name:ident : $field_ty:ty = $field_default:expr
                $(=> $field_env:literal
                    $(| $func:path
                        $([  $($param:expr),* ])?
                    )?
                )?
        ),*$(,)?}
    ) => { paste::paste! {
        #[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
        $(#[$meta])*
        #[serde(deny_unknown_fields)]
        $vis struct $name {$(
            $(#[$field_meta])*
            $(
                #[doc = ""]
                #[doc = "**Overridden by the `" $field_env "` environment variable.**"]
            )?
            $field_vis $field_name: $field_ty,
        )*}

        impl Default for $name {
            #[inline]
            fn default() -> Self {
                $name {$(
                    $field_name: $field_default,
                )*}
            }
        }

        impl Configuration for $name {
            fn configure(&mut self) {
                $($(
                    if let Ok(value) = std::env::var($field_env) {
                        tracing::debug!("Applying environment overwrite for {}.{}=>{}", stringify!($name), stringify!($field_name), $field_env);
                        self.$field_name = ($($func(&value $( $(,$param)* )? ),)? value , ).0.into();
                    }
                )?)*
            }
        }
    }};
}

pub trait Configuration: serde::de::DeserializeOwned {
    /// Applies any environmental overrides and adjustments
    fn configure(&mut self);
}

/// Parses `true`/`false`/`1`/`0`, case-insensitive
pub fn parse_flag(value: &str, default: bool) -> bool {
    match value.trim() {
        v if v.eq_ignore_ascii_case("true") || v == "1" => true,
        v if v.eq_ignore_ascii_case("false") || v == "0" => false,
        _ => default,
    }
}

/// Empty paths are treated as unset
pub fn parse_path(value: &str) -> Option<PathBuf> {
    match value.trim() {
        "" => None,
        path => Some(PathBuf::from(path)),
    }
}

section! {
    #[serde(default)]
    pub struct RegistryConfig {
        /// Registry file to load, the bundled registry data is used when unset
        pub path: Option<PathBuf> = None => "EMOJI_REGISTRY_PATH" | parse_path,

        /// Fail the load when a glyph does not spell its key's codepoints,
        /// otherwise log a warning and keep the key
        pub verify_glyphs: bool = true => "EMOJI_REGISTRY_VERIFY" | parse_flag[true],
    }
}

impl RegistryConfig {
    /// Default configuration with environment overrides applied
    pub fn from_env() -> Self {
        let mut config = RegistryConfig::default();
        config.configure();
        config
    }
}
