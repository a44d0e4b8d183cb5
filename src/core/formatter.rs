use crate::core::translator::all_zeros;
use crate::domain::lexicon;
use std::collections::HashSet;

/// Attaches magnitude suffixes to the group phrases, then assembles the
/// final sentence: drops empty phrases, inserts the trailing "and",
/// comma-joins, and prepends the negative marker.
///
/// `groups` holds the literal digit substrings matching `phrases`
/// position for position.
pub fn final_format(mut phrases: Vec<String>, groups: &[&str], negative: bool) -> String {
    attach_suffixes(&mut phrases, groups);

    let first_is_empty = phrases.first().is_none_or(|phrase| phrase.is_empty());
    let multiple = phrases.len() > 1;

    let kept: Vec<String> = phrases
        .iter()
        .enumerate()
        .filter(|(_, phrase)| !phrase.is_empty())
        .map(|(index, phrase)| {
            // "... and one" endings: a bare digit word after a larger
            // leading phrase gets an "and" in front
            if index > 0 && multiple && !first_is_empty && lexicon::is_basic_word(phrase) {
                format!("and {phrase}")
            } else {
                phrase.trim_end().to_string()
            }
        })
        .collect();

    let joined = if kept.len() >= 2 {
        kept.join(", ")
    } else {
        kept.concat().trim().to_string()
    };

    // an inserted "and" swallows the comma in front of it
    let sentence = joined.replace(", and", " and");

    if negative {
        format!("{}, {}", lexicon::MINUS, sentence)
    } else {
        sentence
    }
}

/// Suffix selection per group: grade counts 1-based from the right, grade 1
/// carries no suffix, all-zero groups are skipped, and the plural form is
/// used for values above one everywhere except the thousands grade.
fn attach_suffixes(phrases: &mut [String], groups: &[&str]) {
    let total = phrases.len();
    let mut used: HashSet<String> = HashSet::new();

    for (index, phrase) in phrases.iter_mut().enumerate() {
        let grade = total - index;
        let Some(singular) = lexicon::large_suffix(grade) else {
            continue;
        };
        if all_zeros(groups[index]) {
            continue;
        }

        // guard against re-attaching a suffix already spent on an earlier
        // group, in either form
        let plural = format!("{singular}s");
        if used.contains(singular) || used.contains(&plural) {
            continue;
        }

        let value: u32 = groups[index].parse().unwrap_or(0);
        let suffix = if value > 1 && grade != 2 {
            plural
        } else {
            singular.to_string()
        };

        *phrase = format!("{}{}", phrase.trim(), suffix);
        used.insert(suffix);
    }
}
