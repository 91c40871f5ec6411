use unicode_segmentation::UnicodeSegmentation;

/// Words that end in a period without ending the sentence.
const ABBREVIATIONS: &[&str] = &[
    "mr.", "mrs.", "ms.", "dr.", "prof.", "sr.", "jr.", "st.", "mt.", "vs.", "etc.", "e.g.",
    "i.e.", "cf.", "al.", "inc.", "ltd.", "co.", "corp.", "no.", "fig.", "vol.", "gen.", "gov.",
    "sen.", "rep.", "lt.", "col.", "sgt.", "capt.", "approx.",
];

/// Split text into sentences.
///
/// Each line is a separate passage; within a passage Unicode sentence
/// boundaries are used. A fragment ending in an abbreviation is joined with
/// the one after it, and so is a fragment ending in an initial that sits
/// next to another initial or follows a capitalized word (`J. R. Tolkien`,
/// `John F. Kennedy`). A lone capital after a lower-case word (`got an A.`)
/// still ends the sentence.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    for passage in text.split('\n') {
        let fragments: Vec<&str> = passage.split_sentence_bounds().collect();
        let mut pending = String::new();
        for (i, fragment) in fragments.iter().enumerate() {
            pending.push_str(fragment);
            if continues(pending.trim_end(), fragments.get(i + 1).copied()) {
                continue;
            }
            push_trimmed(&mut sentences, &pending);
            pending.clear();
        }
        push_trimmed(&mut sentences, &pending);
    }
    sentences
}

fn push_trimmed(sentences: &mut Vec<String>, sentence: &str) {
    let sentence = sentence.trim();
    if !sentence.is_empty() {
        sentences.push(sentence.to_string());
    }
}

fn strip_leading_marks(word: &str) -> &str {
    word.trim_start_matches(|c: char| !c.is_alphanumeric())
}

fn is_initial(word: &str) -> bool {
    let Some(stem) = word.strip_suffix('.') else {
        return false;
    };
    let mut chars = stem.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_uppercase())
}

/// Whether `text` stops short of a real sentence end.
fn continues(text: &str, next: Option<&str>) -> bool {
    let words: Vec<&str> = text.split_whitespace().map(strip_leading_marks).collect();
    let Some(&last) = words.last() else {
        return false;
    };
    if ABBREVIATIONS.contains(&last.to_lowercase().as_str()) {
        return true;
    }
    if !is_initial(last) {
        return false;
    }

    let next_is_initial = next
        .and_then(|fragment| fragment.split_whitespace().next())
        .is_some_and(|word| is_initial(strip_leading_marks(word)));
    // the first word of a sentence is capitalized anyway, so it says nothing
    let follows_name = words.len() >= 3
        && words[words.len() - 2]
            .chars()
            .next()
            .is_some_and(char::is_uppercase);
    let follows_initial = words.len() >= 2 && is_initial(words[words.len() - 2]);

    next_is_initial || follows_initial || follows_name
}
