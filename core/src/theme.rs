//! Deterministic presentation values for rendered user cards.
//!
//! Pure index-to-value lookups over fixed palettes; positions past the end
//! wrap around. No state, no side effects.

const CARD_GRADIENTS: [&str; 6] = [
    "bg-gradient-to-br from-rose-100 via-pink-100 to-red-100",
    "bg-gradient-to-br from-blue-100 via-cyan-100 to-teal-100",
    "bg-gradient-to-br from-purple-100 via-violet-100 to-indigo-100",
    "bg-gradient-to-br from-green-100 via-emerald-100 to-lime-100",
    "bg-gradient-to-br from-yellow-100 via-amber-100 to-orange-100",
    "bg-gradient-to-br from-gray-100 via-slate-100 to-zinc-100",
];

const AVATAR_ICONS: [&str; 6] = [
    "person",
    "face",
    "account_circle",
    "supervisor_account",
    "badge",
    "contact_mail",
];

/// Background gradient classes for the card at `index`.
pub fn card_gradient(index: usize) -> &'static str {
    CARD_GRADIENTS[index % CARD_GRADIENTS.len()]
}

/// Avatar icon name for the card at `index`.
pub fn avatar_icon(index: usize) -> &'static str {
    AVATAR_ICONS[index % AVATAR_ICONS.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradients_cycle_with_the_palette_length() {
        for i in 0..12 {
            assert_eq!(card_gradient(i), card_gradient(i + 6));
        }
    }

    #[test]
    fn adjacent_cards_get_distinct_gradients() {
        assert_ne!(card_gradient(0), card_gradient(1));
    }

    #[test]
    fn icons_cycle_with_the_palette_length() {
        for i in 0..12 {
            assert_eq!(avatar_icon(i), avatar_icon(i + 6));
        }
    }

    #[test]
    fn adjacent_cards_get_distinct_icons() {
        assert_ne!(avatar_icon(0), avatar_icon(1));
    }

    #[test]
    fn first_index_maps_to_first_entry() {
        assert_eq!(avatar_icon(0), "person");
        assert_eq!(avatar_icon(6), "person");
    }
}
