use crate::dict::{NodeId, WordIndex};

use super::keymap::letters_for;
use super::QueryResult;

/// Walk `index` from `node`, consuming one digit per level and branching on
/// every letter of that digit's key. Complete words reached exactly when the
/// digits run out are appended to `out` in depth-first, keypad-letter order.
pub(super) fn collect_matches(
    index: &WordIndex,
    node: NodeId,
    digits: &str,
    out: &mut Vec<QueryResult>,
) {
    let mut rest = digits.chars();
    let Some(digit) = rest.next() else {
        let score = index.score_at(node);
        if score > 0 {
            out.push(QueryResult {
                score,
                word: index.reconstruct_word(node),
            });
        }
        return;
    };

    let rest = rest.as_str();
    for &letter in letters_for(digit) {
        if let Some(child) = index.child(node, letter) {
            collect_matches(index, child, rest, out);
        }
    }
}
