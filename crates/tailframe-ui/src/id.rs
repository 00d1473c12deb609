//! Element-id minting for components that pair a trigger with a target
//! element (modals, tooltips, form fields).
//!
//! When the caller does not supply an id, one is minted as
//! `<prefix>_<8 lowercase hex chars>`. Collision avoidance is all that
//! is required; the id only has to be stable for the lifetime of the
//! rendered markup so ARIA/data attributes can reference it.

use rand::Rng;

/// Mint an element id using the thread-local RNG.
pub fn element_id(prefix: &str) -> String {
    let id = element_id_with(prefix, &mut rand::rng());
    tracing::trace!(id = %id, "minted element id");
    id
}

/// Mint an element id from an explicit RNG.
///
/// Tests seed a [`rand::rngs::StdRng`] here to get reproducible output;
/// everything else in the crate is already deterministic.
pub fn element_id_with<R: Rng>(prefix: &str, rng: &mut R) -> String {
    let token: [u8; 4] = rng.random();
    format!("{}_{}", prefix, hex::encode(token))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn minted_id_has_prefix_and_8_hex_chars() {
        let id = element_id("modal");
        let token = id.strip_prefix("modal_").expect("prefix");
        assert_eq!(token.len(), 8);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let a = element_id_with("tooltip", &mut StdRng::seed_from_u64(7));
        let b = element_id_with("tooltip", &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_give_different_tokens() {
        let a = element_id_with("tooltip", &mut StdRng::seed_from_u64(1));
        let b = element_id_with("tooltip", &mut StdRng::seed_from_u64(2));
        assert_ne!(a, b);
    }
}
