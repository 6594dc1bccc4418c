use proptest::prelude::*;
use reverb_server::models::reverse_code_points;

proptest! {
    /// Property: reversing twice gives back the original string
    #[test]
    fn prop_reverse_is_involution(s in any::<String>()) {
        prop_assert_eq!(reverse_code_points(&reverse_code_points(&s)), s);
    }

    /// Property: reversal keeps every code point and only changes order
    #[test]
    fn prop_reverse_preserves_code_points(s in any::<String>()) {
        let reversed = reverse_code_points(&s);
        prop_assert_eq!(reversed.len(), s.len());

        let forward: Vec<char> = s.chars().collect();
        let backward: Vec<char> = reversed.chars().rev().collect();
        prop_assert_eq!(forward, backward);
    }
}
