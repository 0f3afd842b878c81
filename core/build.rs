use std::collections::{BTreeMap, HashMap};
use std::env;
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

const LANGUAGE_CODES: [&str; 3] = ["hu", "de", "en"];

#[derive(Deserialize)]
struct TranslationsFile {
    languages: BTreeMap<String, BTreeMap<String, String>>,
}

fn main() {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("missing CARGO_MANIFEST_DIR"));
    let workspace_root = manifest_dir.parent().unwrap_or(&manifest_dir);
    let env_path = workspace_root.join(".env");
    let env_local_path = workspace_root.join(".env.local");

    let _ = dotenvy::from_filename(&env_local_path);
    let _ = dotenvy::from_filename(&env_path);

    println!("cargo:rerun-if-env-changed=SITE_TRANSLATIONS_PATH");
    println!("cargo:rerun-if-changed={}", env_path.display());
    println!("cargo:rerun-if-changed={}", env_local_path.display());

    let translations_path = resolve_translations_path(workspace_root);
    println!("cargo:rerun-if-changed={}", translations_path.display());

    let contents = fs::read_to_string(&translations_path).unwrap_or_else(|err| {
        panic!(
            "failed to read translations at {}: {err}",
            translations_path.display()
        )
    });

    let file: TranslationsFile = toml::from_str(&contents).unwrap_or_else(|err| {
        panic!(
            "failed to parse translations at {}: {err}",
            translations_path.display()
        )
    });

    let keys = validate_tables(&file.languages, &translations_path);
    let variants = variant_names(&keys, &translations_path);

    let mut output = String::new();
    writeln!(
        &mut output,
        "#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]"
    )
    .unwrap();
    writeln!(&mut output, "pub enum TextKey {{").unwrap();
    for variant in &variants {
        writeln!(&mut output, "    {variant},").unwrap();
    }
    writeln!(&mut output, "}}").unwrap();
    writeln!(&mut output).unwrap();

    writeln!(&mut output, "impl TextKey {{").unwrap();
    writeln!(&mut output, "    pub const ALL: &'static [TextKey] = &[").unwrap();
    for variant in &variants {
        writeln!(&mut output, "        TextKey::{variant},").unwrap();
    }
    writeln!(&mut output, "    ];").unwrap();
    writeln!(&mut output).unwrap();
    writeln!(&mut output, "    pub fn as_str(self) -> &'static str {{").unwrap();
    writeln!(&mut output, "        match self {{").unwrap();
    for (key, variant) in keys.iter().zip(&variants) {
        writeln!(
            &mut output,
            "            TextKey::{variant} => {},",
            rust_string(key)
        )
        .unwrap();
    }
    writeln!(&mut output, "        }}").unwrap();
    writeln!(&mut output, "    }}").unwrap();
    writeln!(&mut output).unwrap();
    writeln!(
        &mut output,
        "    pub fn from_key(key: &str) -> Option<TextKey> {{"
    )
    .unwrap();
    writeln!(&mut output, "        match key {{").unwrap();
    for (key, variant) in keys.iter().zip(&variants) {
        writeln!(
            &mut output,
            "            {} => Some(TextKey::{variant}),",
            rust_string(key)
        )
        .unwrap();
    }
    writeln!(&mut output, "            _ => None,").unwrap();
    writeln!(&mut output, "        }}").unwrap();
    writeln!(&mut output, "    }}").unwrap();
    writeln!(&mut output, "}}").unwrap();

    for code in LANGUAGE_CODES {
        let table = &file.languages[code];
        writeln!(&mut output).unwrap();
        writeln!(
            &mut output,
            "pub(crate) const TABLE_{}: &[&str] = &[",
            code.to_ascii_uppercase()
        )
        .unwrap();
        for key in &keys {
            writeln!(&mut output, "    {},", rust_string(&table[key])).unwrap();
        }
        writeln!(&mut output, "];").unwrap();
    }

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("missing OUT_DIR"));
    let out_path = out_dir.join("translations.rs");
    fs::write(&out_path, output).unwrap_or_else(|err| {
        panic!("failed to write {}: {err}", out_path.display())
    });
}

fn resolve_translations_path(workspace_root: &Path) -> PathBuf {
    let env_value = env::var("SITE_TRANSLATIONS_PATH").ok();
    let raw_path = match env_value {
        Some(value) if !value.trim().is_empty() => PathBuf::from(value),
        _ => workspace_root.join("translations/site.toml"),
    };
    if raw_path.is_relative() {
        workspace_root.join(raw_path)
    } else {
        raw_path
    }
}

fn rust_string(value: &str) -> String {
    format!("{:?}", value)
}

fn validate_tables(
    languages: &BTreeMap<String, BTreeMap<String, String>>,
    path: &Path,
) -> Vec<String> {
    for code in languages.keys() {
        if !LANGUAGE_CODES.contains(&code.as_str()) {
            panic!(
                "unsupported language '{}' in {} (expected one of {:?})",
                code,
                path.display(),
                LANGUAGE_CODES
            );
        }
    }
    for code in LANGUAGE_CODES {
        if !languages.contains_key(code) {
            panic!("missing language table '{}' in {}", code, path.display());
        }
    }

    let reference_code = LANGUAGE_CODES[0];
    let reference = &languages[reference_code];
    if reference.is_empty() {
        panic!(
            "language table '{}' has no entries in {}",
            reference_code,
            path.display()
        );
    }

    for code in LANGUAGE_CODES {
        let table = &languages[code];
        for (key, value) in table {
            if !is_namespaced_key(key) {
                panic!(
                    "key '{}' in language '{}' must be dot-namespaced (e.g. \"nav.home\") in {}",
                    key,
                    code,
                    path.display()
                );
            }
            if value.trim().is_empty() {
                panic!(
                    "key '{}' in language '{}' has an empty value in {}",
                    key,
                    code,
                    path.display()
                );
            }
            if !reference.contains_key(key) {
                panic!(
                    "key '{}' exists in '{}' but not in '{}' in {}",
                    key,
                    code,
                    reference_code,
                    path.display()
                );
            }
        }
        for key in reference.keys() {
            if !table.contains_key(key) {
                panic!(
                    "key '{}' exists in '{}' but not in '{}' in {}",
                    key,
                    reference_code,
                    code,
                    path.display()
                );
            }
        }
    }

    reference.keys().cloned().collect()
}

fn is_namespaced_key(key: &str) -> bool {
    let mut parts = key.split('.');
    let has_namespace = matches!(parts.next(), Some(first) if !first.is_empty());
    let mut rest = 0;
    for part in parts {
        if part.is_empty() {
            return false;
        }
        rest += 1;
    }
    has_namespace
        && rest > 0
        && key
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == '.' || ch == '_' || ch == '-')
}

fn variant_names(keys: &[String], path: &Path) -> Vec<String> {
    let mut seen: HashMap<String, &str> = HashMap::new();
    let mut variants = Vec::with_capacity(keys.len());
    for key in keys {
        let variant = variant_name(key);
        if let Some(previous) = seen.insert(variant.clone(), key) {
            panic!(
                "keys '{}' and '{}' both map to TextKey::{} in {}",
                previous,
                key,
                variant,
                path.display()
            );
        }
        variants.push(variant);
    }
    variants
}

fn variant_name(key: &str) -> String {
    let mut name = String::with_capacity(key.len());
    for word in key.split(|ch: char| ch == '.' || ch == '_' || ch == '-') {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            name.push(first.to_ascii_uppercase());
            name.extend(chars);
        }
    }
    if name.starts_with(|ch: char| ch.is_ascii_digit()) {
        name.insert(0, 'K');
    }
    name
}
