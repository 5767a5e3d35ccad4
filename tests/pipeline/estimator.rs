use brandtaste::catalog::{Mood, Quality};
use brandtaste::estimator::estimate_swipes;
use brandtaste::{InferenceError, estimate};

use crate::swipe_harness::{full_session, session};

mod properties {
    use super::*;

    #[test]
    fn every_liked_subset_satisfies_profile_invariants() {
        for mask in 1_u32..(1 << 10) {
            let s = full_session(|i| mask & (1 << i) != 0);
            let profile = estimate(&s).unwrap();
            profile
                .check_invariants()
                .unwrap_or_else(|e| panic!("mask {mask:#012b}: {e}"));

            let inference = &profile.metadata.inference;
            assert_eq!(inference.liked_count, mask.count_ones());
            assert_eq!(inference.total_swipes, 10);
            assert_eq!(
                inference.liked_count + inference.disliked_count,
                inference.total_swipes
            );
            for mood in Mood::ALL {
                let score = profile.mood(mood);
                assert!((0.0..=10.0).contains(&score.value));
                assert!((0.0..=1.0).contains(&score.confidence));
            }
            for quality in Quality::ALL {
                assert!((0.0..=10.0).contains(&profile.quality(quality)));
            }
            let intensity = profile.imagery_and_media.hero_image_overlay.intensity;
            assert!((0.0..=1.0).contains(&intensity), "intensity {intensity}");
        }
    }

    #[test]
    fn output_is_byte_identical_across_runs() {
        let s = session(&[
            ("Nike", true),
            ("Chanel", false),
            ("Tesla", true),
            ("Coca-Cola", true),
        ]);
        let first = estimate(&s).unwrap().to_prompt_json().unwrap();
        let second = estimate(&s.clone()).unwrap().to_prompt_json().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn session_and_slice_entry_points_agree() {
        let s = session(&[("BMW", true), ("Disney", false)]);
        assert_eq!(
            estimate(&s).unwrap(),
            estimate_swipes(s.user_id(), s.swipes()).unwrap()
        );
    }
}

mod spread_and_frequency {
    use super::*;

    #[test]
    fn tight_and_wide_luxury_spreads() {
        let tight = estimate(&session(&[("Chanel", true), ("BMW", true)])).unwrap();
        assert!((tight.mood(Mood::Luxury).confidence - 0.90).abs() < f64::EPSILON);

        let wide = estimate(&session(&[("BMW", true), ("Nintendo", true)])).unwrap();
        assert!((wide.mood(Mood::Luxury).confidence - 0.60).abs() < f64::EPSILON);
    }

    #[test]
    fn disliked_entries_between_likes_do_not_change_tie_break() {
        // Chanel (spacious) is liked before Nike (standard); dislikes in between.
        let with_noise = estimate(&session(&[
            ("Tesla", false),
            ("Chanel", true),
            ("McDonald's", false),
            ("Nike", true),
        ]))
        .unwrap();
        let clean = estimate(&session(&[("Chanel", true), ("Nike", true)])).unwrap();
        assert_eq!(
            with_noise.layout_and_structure.density,
            clean.layout_and_structure.density
        );
    }
}

mod precondition {
    use super::*;

    #[test]
    fn all_dislikes_fail_with_total() {
        let s = full_session(|_| false);
        let err = estimate(&s).unwrap_err();
        assert!(matches!(err, InferenceError::NoLikedSwipes { total: 10 }));
        assert!(err.to_string().contains("0 liked"));
    }
}
