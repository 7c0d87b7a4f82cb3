//! Code space enumeration

use super::{Code, Scheme};

/// Enumerate every code of a scheme, opening guess first
///
/// The opening guess (see [`Code::opening`]) heads the list. Every other code
/// follows in lexicographic order over the alphabet, with the opening guess
/// skipped at its natural position so nothing is repeated.
///
/// # Examples
/// ```
/// use mastermind_solver::core::{Scheme, generate_all};
///
/// let space = generate_all(Scheme::CLASSIC);
/// assert_eq!(space.len(), 1296);
/// assert_eq!(space[0].to_string(), "abcd");
/// assert_eq!(space[1].to_string(), "aaaa");
/// ```
#[must_use]
pub fn generate_all(scheme: Scheme) -> Vec<Code> {
    let opening = Code::opening(scheme);
    let colors = scheme.colors() as u8;

    let mut codes = Vec::with_capacity(scheme.space_size());
    codes.push(opening.clone());

    let mut pegs = vec![0u8; scheme.pegs()];
    loop {
        if pegs != opening.pegs() {
            codes.push(Code::from_pegs(pegs.clone()));
        }

        // Odometer step, last position fastest
        let Some(pos) = pegs.iter().rposition(|&p| p + 1 < colors) else {
            break;
        };
        pegs[pos] += 1;
        pegs[pos + 1..].fill(0);
    }

    codes
}
