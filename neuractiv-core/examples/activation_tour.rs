//! # Activation Catalogue Tour
//!
//! Applies every activation function of the catalogue to one sample vector,
//! using the documented default parameters and a seeded generator for the
//! stochastic member so two runs print the same numbers.
//!
//! ## Execution
//! `cargo run --example activation_tour`

use neuractiv_core::ops::activation::{
    celu, celu_op, hard_swish_op, hard_tanh, hard_tanh_op, hardsigmoid, hardsigmoid_op,
    log_sigmoid_op, prelu_op, relu6_op, rrelu, rrelu_with_rng, softshrink, softshrink_op,
    softsign_op,
};
use neuractiv_core::NeurActivError;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> Result<(), NeurActivError> {
    let input = vec![-3.8, -2.0, -0.5, 0.0, 0.6, 2.3, 4.56];
    println!("input:        {:?}", input);

    println!("celu:         {:?}", celu_op(&input, celu::DEFAULT_ALPHA)?);
    println!(
        "hardsigmoid:  {:?}",
        hardsigmoid_op(&input, hardsigmoid::DEFAULT_ALPHA, hardsigmoid::DEFAULT_BETA)
    );
    println!("hard_swish:   {:?}", hard_swish_op(&input));
    println!(
        "hard_tanh:    {:?}",
        hard_tanh_op(&input, hard_tanh::DEFAULT_MIN_VAL, hard_tanh::DEFAULT_MAX_VAL)?
    );
    println!("log_sigmoid:  {:?}", log_sigmoid_op(&input));
    println!("prelu(0.3):   {:?}", prelu_op(&input, 0.3));
    println!("relu6:        {:?}", relu6_op(&input));
    println!(
        "softshrink:   {:?}",
        softshrink_op(&input, softshrink::DEFAULT_LAMBD)?
    );
    println!("softsign:     {:?}", softsign_op(&input));

    let mut rng = StdRng::seed_from_u64(7);
    println!(
        "rrelu:        {:?}",
        rrelu_with_rng(&input, rrelu::DEFAULT_LOWER, rrelu::DEFAULT_UPPER, &mut rng)?
    );

    Ok(())
}
