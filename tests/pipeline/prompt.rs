use brandtaste::compile_inference_prompt;
use brandtaste::prompt::compile_for_swipes;

use crate::swipe_harness::{full_session, session};

#[test]
fn prompt_lists_every_swipe_of_a_full_session() {
    let s = full_session(|i| i % 2 == 0);
    let prompt = compile_inference_prompt(&s).unwrap();
    for swipe in s.swipes() {
        assert!(
            prompt.contains(&format!("Brand: {}", swipe.brand_name)),
            "missing {}",
            swipe.brand_name
        );
    }
    assert!(prompt.contains("\"totalSwipes\": 10,"));
}

#[test]
fn prompt_is_deterministic_and_carries_user() {
    let s = session(&[("Nintendo", true), ("Chanel", false)]);
    let a = compile_inference_prompt(&s).unwrap();
    let b = compile_for_swipes(s.user_id(), s.swipes()).unwrap();
    assert_eq!(a, b);
    assert!(a.contains("harness-user"));
}

#[test]
fn prompt_ends_with_output_contract() {
    let prompt = compile_inference_prompt(&session(&[("Tesla", true)])).unwrap();
    assert!(
        prompt
            .trim_end()
            .ends_with("Do NOT write anything after the closing fence of the JSON code block")
    );
}
