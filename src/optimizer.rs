//! # Codeset Optimizer
//!
//! Picks a codeset for every unit so that the encoded barcode has as few
//! symbols as possible.
//!
//! ## Algorithm
//!
//! Backward dynamic programming over `cost[codeset][position]`: the minimum
//! number of symbols needed to encode `units[position..]` when `codeset` is
//! active at `position`. `cost[*][n]` is zero. Each transition encodes one
//! unit (or one digit pair) and says which codeset is active afterwards:
//!
//! | Transition | Cost | Span | Condition |
//! |------------|------|------|-----------|
//! | Stay in A/B | 1 | 1 | char in that codeset |
//! | A/B, then switch | 2 | 1 | char in that codeset |
//! | Shift | 2 | 1 | char in exactly one of A/B |
//! | Stay in C | 1 | 2 | two digits |
//! | C, then switch | 2 | 2 | two digits |
//! | FNC1 | 1 | 1 | always, codeset unchanged |
//!
//! Costs count symbols, so the cheapest path is the shortest barcode. The
//! grids are flat vectors of `3 * (n + 1)` cells, which keeps time and
//! memory linear in the text length.
//!
//! ## Example
//!
//! ```
//! use code128::codeset::Codeset::{B, C};
//! use code128::optimizer::choose_codesets;
//! use code128::text::Text;
//!
//! let text: Text = "x1234".parse()?;
//! assert_eq!(choose_codesets(&text), vec![B, C, C, C, C]);
//! # Ok::<(), code128::Code128Error>(())
//! ```

use tracing::debug;

use crate::codeset::Codeset;
use crate::text::Unit;

const UNREACHABLE: usize = usize::MAX;

/// Choose one codeset per unit, minimizing the total symbol count.
///
/// FNC1 positions carry whatever codeset is active around them. Both
/// positions of a codeset C digit pair are tagged C. Empty input gives an
/// empty plan.
pub fn choose_codesets(units: &[Unit]) -> Vec<Codeset> {
    if units.is_empty() {
        return Vec::new();
    }

    let table = CostTable::compute(units);
    let start = table.start_codeset();
    let plan = table.path(start);

    debug!(
        units = units.len(),
        cost = table.cost(start, 0),
        start = %start,
        "chose codesets"
    );
    plan
}

/// Minimum number of symbols between the start token and the checksum.
///
/// This counts data symbols plus every switch, shift and FNC1 token. The
/// full barcode adds three more: start, checksum and End.
pub fn optimal_cost(units: &[Unit]) -> usize {
    if units.is_empty() {
        return 0;
    }

    let table = CostTable::compute(units);
    table.cost(table.start_codeset(), 0)
}

/// Cost and back-pointer grids, one row per codeset.
struct CostTable {
    len: usize,
    cost: Vec<usize>,
    next_pos: Vec<usize>,
    next_codeset: Vec<Codeset>,
}

impl CostTable {
    fn new(len: usize) -> Self {
        let cells = Codeset::ALL.len() * (len + 1);
        let mut table = CostTable {
            len,
            cost: vec![UNREACHABLE; cells],
            next_pos: vec![len; cells],
            next_codeset: vec![Codeset::B; cells],
        };
        for codeset in Codeset::ALL {
            let end = table.cell(codeset, len);
            table.cost[end] = 0;
        }
        table
    }

    fn cell(&self, codeset: Codeset, pos: usize) -> usize {
        codeset.index() * (self.len + 1) + pos
    }

    fn cost(&self, codeset: Codeset, pos: usize) -> usize {
        self.cost[self.cell(codeset, pos)]
    }

    fn compute(units: &[Unit]) -> Self {
        let mut table = CostTable::new(units.len());

        for pos in (0..units.len()).rev() {
            let code = match units[pos] {
                Unit::Fnc1 => {
                    for codeset in Codeset::ALL {
                        table.relax(pos, 1, codeset, codeset, 1);
                    }
                    continue;
                }
                Unit::Ascii(code) => code,
            };

            let in_a = Codeset::A.encodes(code);
            let in_b = Codeset::B.encodes(code);
            if in_a {
                table.relax_single(pos, Codeset::A, Codeset::B, !in_b);
            }
            if in_b {
                table.relax_single(pos, Codeset::B, Codeset::A, !in_a);
            }

            let pair = units
                .get(pos + 1)
                .is_some_and(|next| Codeset::pair_value(units[pos], *next).is_some());
            if pair {
                table.relax(pos, 2, Codeset::C, Codeset::C, 1);
                table.relax(pos, 2, Codeset::C, Codeset::A, 2);
                table.relax(pos, 2, Codeset::C, Codeset::B, 2);
            }
        }

        table
    }

    /// Transitions for a character that `main` encodes directly.
    ///
    /// When `other` cannot encode it, `other` may still take it with a Shift.
    fn relax_single(&mut self, pos: usize, main: Codeset, other: Codeset, exclusive: bool) {
        self.relax(pos, 1, main, main, 1);
        self.relax(pos, 1, main, other, 2);
        self.relax(pos, 1, main, Codeset::C, 2);

        if exclusive {
            self.relax(pos, 1, other, other, 2);
        }
    }

    /// Encode `span` units at `pos` in `here`, continuing in `next`.
    ///
    /// Only strictly cheaper paths replace the recorded one, so the first
    /// rule to reach a cost wins ties.
    fn relax(&mut self, pos: usize, span: usize, here: Codeset, next: Codeset, step: usize) {
        let next_pos = pos + span;
        let rest = self.cost(next, next_pos);
        if rest == UNREACHABLE {
            return;
        }

        let candidate = rest + step;
        let cell = self.cell(here, pos);
        if candidate < self.cost[cell] {
            self.cost[cell] = candidate;
            self.next_pos[cell] = next_pos;
            self.next_codeset[cell] = next;
        }
    }

    /// C must be strictly cheaper than both A and B; B wins A/B ties.
    fn start_codeset(&self) -> Codeset {
        let cost_a = self.cost(Codeset::A, 0);
        let cost_b = self.cost(Codeset::B, 0);
        let cost_c = self.cost(Codeset::C, 0);

        if cost_c < cost_a && cost_c < cost_b {
            Codeset::C
        } else if cost_a < cost_b {
            Codeset::A
        } else {
            Codeset::B
        }
    }

    fn path(&self, start: Codeset) -> Vec<Codeset> {
        let mut plan = Vec::with_capacity(self.len);
        let mut pos = 0;
        let mut codeset = start;

        while pos < self.len {
            let cell = self.cell(codeset, pos);
            let next_pos = self.next_pos[cell];
            plan.extend(std::iter::repeat_n(codeset, next_pos - pos));
            pos = next_pos;
            codeset = self.next_codeset[cell];
        }

        plan
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codeset::Codeset::{A, B, C};
    use crate::encoder::encode;
    use crate::text::Text;
    use pretty_assertions::assert_eq;

    fn optimize(s: &str) -> Vec<Codeset> {
        choose_codesets(&Text::parse(s).unwrap())
    }

    // ========================================================================
    // BASIC SELECTION
    // ========================================================================

    #[test]
    fn test_uses_codeset_b_for_lowercase() {
        assert_eq!(optimize("test"), vec![B, B, B, B]);
    }

    #[test]
    fn test_uses_codeset_a_for_control_characters() {
        assert_eq!(optimize("\r\n\r\n"), vec![A, A, A, A]);
    }

    #[test]
    fn test_favors_b_over_a_when_equal() {
        assert_eq!(optimize("TEST"), vec![B, B, B, B]);
    }

    #[test]
    fn test_uses_codeset_c_for_digit_runs() {
        assert_eq!(optimize("12"), vec![C, C]);
        assert_eq!(optimize("1234"), vec![C, C, C, C]);
        assert_eq!(optimize("123456"), vec![C; 6]);
    }

    #[test]
    fn test_empty_input_gives_empty_plan() {
        assert!(choose_codesets(&[]).is_empty());
        assert_eq!(optimal_cost(&[]), 0);
    }

    // ========================================================================
    // SWITCHING AND SHIFTING
    // ========================================================================

    #[test]
    fn test_changes_codeset() {
        assert_eq!(optimize("abc\r\nA"), vec![B, B, B, A, A, A]);
    }

    #[test]
    fn test_b_shifts_to_a_for_single_control_char() {
        for text in ["t\nest", "te\nst", "tes\nt"] {
            assert_eq!(optimize(text), vec![B; 5], "text {:?}", text);
        }
    }

    #[test]
    fn test_a_shifts_to_b_for_single_lowercase_char() {
        for text in ["\nx\n\n\n", "\n\nx\n\n", "\n\n\nx\n"] {
            assert_eq!(optimize(text), vec![A; 5], "text {:?}", text);
        }
    }

    // ========================================================================
    // DIGIT PAIRS
    // ========================================================================

    #[test]
    fn test_three_digits_stay_in_b() {
        assert_eq!(optimize("123"), vec![B, B, B]);
    }

    #[test]
    fn test_leading_digits_use_c() {
        assert_eq!(optimize("1234x"), vec![C, C, C, C, B]);
    }

    #[test]
    fn test_trailing_digits_use_c() {
        assert_eq!(optimize("x1234"), vec![B, C, C, C, C]);
    }

    #[test]
    fn test_no_switch_to_c_unless_shorter() {
        assert_eq!(optimize("x1234x"), vec![B; 6]);
    }

    #[test]
    fn test_odd_digit_run_leaves_one_digit_outside_c() {
        assert_eq!(optimize("x1234567"), vec![B, B, C, C, C, C, C, C]);
    }

    #[test]
    fn test_fnc1_does_not_break_codeset_c() {
        for text in ["¤1234", "12¤34", "1234¤"] {
            assert_eq!(optimize(text), vec![C; 5], "text {:?}", text);
        }
    }

    #[test]
    fn test_fnc1_splits_digit_pairs() {
        // "1¤2" has no adjacent digits, so C never applies
        let plan = optimize("1¤2");
        assert!(!plan.contains(&C));
    }

    // ========================================================================
    // OPTIMALITY
    // ========================================================================

    fn all_plans(len: usize) -> Vec<Vec<Codeset>> {
        (0..len).fold(vec![Vec::new()], |plans, _| {
            plans
                .into_iter()
                .flat_map(|plan| {
                    Codeset::ALL.into_iter().map(move |codeset| {
                        let mut next = plan.clone();
                        next.push(codeset);
                        next
                    })
                })
                .collect()
        })
    }

    fn all_texts(alphabet: &[Unit], len: usize) -> Vec<Vec<Unit>> {
        (0..len).fold(vec![Vec::new()], |texts, _| {
            texts
                .into_iter()
                .flat_map(|text| {
                    alphabet.iter().map(move |unit| {
                        let mut next = text.clone();
                        next.push(*unit);
                        next
                    })
                })
                .collect()
        })
    }

    #[test]
    fn test_plan_is_never_longer_than_any_legal_plan() {
        let alphabet = [
            Unit::Ascii(b'a'),
            Unit::Ascii(b'A'),
            Unit::Ascii(b'\t'),
            Unit::Ascii(b'1'),
            Unit::Ascii(b'2'),
            Unit::Fnc1,
        ];

        for len in 1..=5 {
            let plans = all_plans(len);
            for units in all_texts(&alphabet, len) {
                let chosen = encode(&units, &choose_codesets(&units)).unwrap();
                let best = plans
                    .iter()
                    .filter_map(|plan| encode(&units, plan).ok())
                    .map(|symbols| symbols.len())
                    .min()
                    .unwrap();
                assert_eq!(chosen.len(), best, "units {:?}", units);
            }
        }
    }

    #[test]
    fn test_optimal_cost_matches_encoded_length() {
        for s in ["test", "1234", "a\tb", "ab\t\t1234ab", "¤1234", "x1234567"] {
            let text = Text::parse(s).unwrap();
            let symbols = encode(&text, &choose_codesets(&text)).unwrap();
            assert_eq!(optimal_cost(&text) + 3, symbols.len(), "text {:?}", s);
        }
    }

    #[test]
    fn test_long_input_is_linear_and_complete() {
        let s: String = "ab\t12345¤".repeat(2000);
        let text = Text::parse(&s).unwrap();
        assert_eq!(choose_codesets(&text).len(), text.len());
    }
}
