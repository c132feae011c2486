//! Renders a [`WordEntry`] as reply text.

use crate::types::WordEntry;

/// Reply for every lookup that did not produce an entry.
pub const NOT_FOUND_MESSAGE: &str = "Sorry, I couldn't find a definition for that word.";

/// Formats `entry` as a header line followed by one numbered block per meaning.
///
/// ```text
/// Definitions and details for "hello":
///
/// 1. (exclamation) used as a greeting
///    Synonyms: hi
///
/// ```
///
/// Synonym and antonym lines appear only when the list is non-empty.
pub fn format_entry(entry: &WordEntry) -> String {
    let mut reply = format!("Definitions and details for \"{}\":\n\n", entry.word);

    for (index, meaning) in entry.meanings.iter().enumerate() {
        reply.push_str(&format!(
            "{}. ({}) {}\n",
            index + 1,
            meaning.part_of_speech,
            meaning.definition
        ));
        if !meaning.synonyms.is_empty() {
            reply.push_str(&format!("   Synonyms: {}\n", meaning.synonyms.join(", ")));
        }
        if !meaning.antonyms.is_empty() {
            reply.push_str(&format!("   Antonyms: {}\n", meaning.antonyms.join(", ")));
        }
        reply.push('\n');
    }

    reply
}
