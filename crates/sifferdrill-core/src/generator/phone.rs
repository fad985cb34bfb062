use rand::Rng;

use crate::atoms::decompose_phone_number;
use crate::generator::QuestionGenerator;
use crate::model::Question;

/// Swedish mobile numbers of the form `07x-ddd pp pp`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PhoneNumberGenerator;

impl QuestionGenerator for PhoneNumberGenerator {
    fn name(&self) -> &'static str {
        "phone-number"
    }

    fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Question {
        let operator: u32 = rng.gen_range(0..10);
        let group = format!("{:03}", rng.gen_range(0..1000));
        let first_pair = format!("{:02}", rng.gen_range(0..100));
        let second_pair = format!("{:02}", rng.gen_range(0..100));

        let target = format!("07{operator}{group}{first_pair}{second_pair}");
        let group_digits: Vec<String> = group.chars().map(String::from).collect();
        let spoken = format!(
            "0 7 {operator}, {}, {first_pair}, {second_pair}",
            group_digits.join(" ")
        );
        let atoms = decompose_phone_number(&target).unwrap_or_default();

        Question::new(target, atoms)
            .with_spoken_text(spoken)
            .with_visual_hint(format!("07{operator}-{group} {first_pair} {second_pair}"))
    }
}
