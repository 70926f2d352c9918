use super::{LogitMatrix, Vocabulary};

/// Greedy CTC decoding: per-frame arg-max, collapse of consecutive repeats,
/// blank removal, then vocabulary lookup.
///
/// Total and deterministic over any well-formed matrix; an all-blank matrix
/// decodes to the empty string. Arg-max ties go to the lowest index.
pub fn greedy_decode(logits: &LogitMatrix, vocabulary: &Vocabulary) -> String {
    let mut text = String::new();
    let mut previous: Option<usize> = None;

    for t in 0..logits.time_steps() {
        let frame = logits.frame(t);
        let mut best = 0usize;
        let mut best_score = f32::NEG_INFINITY;
        for (id, &score) in frame.iter().enumerate() {
            // strict comparison keeps ties on the lowest index
            if score > best_score {
                best_score = score;
                best = id;
            }
        }

        if previous == Some(best) {
            continue;
        }
        previous = Some(best);

        if best == vocabulary.blank_id() || vocabulary.is_structural(best) {
            continue;
        }
        if vocabulary.is_word_delimiter(best) {
            if !text.is_empty() && !text.ends_with(' ') {
                text.push(' ');
            }
            continue;
        }
        if let Some(token) = vocabulary.token(best) {
            text.push_str(token);
        }
    }

    text.trim_end().to_string()
}
