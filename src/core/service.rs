use crate::core::classifier::{is_perfect, is_prime, number_properties};
use crate::domain::model::{ClassificationResult, Number, Property};
use crate::domain::ports::FactProvider;
use crate::utils::error::Result;

/// Returned whenever a fact cannot be fetched.
pub const FALLBACK_FACT: &str = "No fact available.";

pub struct ClassifierService<F: FactProvider> {
    facts: F,
}

impl<F: FactProvider> ClassifierService<F> {
    pub fn new(facts: F) -> Self {
        Self { facts }
    }

    /// Trial division runs on the blocking pool while the fact is fetched.
    pub async fn classify(&self, number: Number) -> Result<ClassificationResult> {
        let whole = number.truncated();
        let predicates = tokio::task::spawn_blocking(move || Predicates::compute(&number));

        let (predicates, fun_fact) = tokio::join!(predicates, self.fun_fact(whole));
        let predicates = predicates?;

        Ok(ClassificationResult {
            number,
            is_prime: predicates.is_prime,
            is_perfect: predicates.is_perfect,
            properties: predicates.properties,
            digit_sum: predicates.digit_sum,
            fun_fact,
        })
    }

    async fn fun_fact(&self, number: i64) -> String {
        match self.facts.fetch_fact(number).await {
            Ok(fact) => fact,
            Err(e) => {
                tracing::warn!("Fact lookup for {} failed, using fallback: {}", number, e);
                FALLBACK_FACT.to_string()
            }
        }
    }
}

struct Predicates {
    properties: Vec<Property>,
    digit_sum: u64,
    is_prime: bool,
    is_perfect: bool,
}

impl Predicates {
    fn compute(number: &Number) -> Self {
        let (properties, digit_sum) = number_properties(number);
        let whole = number.truncated();
        Self {
            properties,
            digit_sum,
            is_prime: is_prime(whole),
            is_perfect: is_perfect(whole),
        }
    }
}
