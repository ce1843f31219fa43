//! Sample YAML inputs.

/// Entries grouped only by language.
pub const SPANISH: &str = "\
dog:
  language: es
  meaning: perro
gato:
  language: es
  meaning: cat
";

/// Entries grouped only by type.
pub const BY_TYPE: &str = "\
a:
  type: verb
  meaning: x
b:
  type: noun
  meaning: y
";

/// Languages and types interleaved.
pub const MIXED: &str = "\
hund:
  language: de
  meaning: dog
correr:
  language: es
  type: verb
  meaning: to run
perro:
  language: es
  meaning: dog
laufen:
  language: de
  type: verb
  meaning: to run
katze:
  language: de
  meaning: cat
";

/// Generate `count` entries spread over `languages`, round-robin.
pub fn many_entries(count: usize, languages: &[&str]) -> String {
    (0..count)
        .map(|i| {
            format!(
                "word{}:\n  language: {}\n  meaning: meaning {}\n",
                i,
                languages[i % languages.len()],
                i
            )
        })
        .collect()
}
