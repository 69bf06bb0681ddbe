use crate::models::Polarity;

/// A sentiment scorer producing the two-valued label domain. The pipeline is
/// parameterized by this trait so a run with a different scorer is the same
/// pipeline with a different injection, not a second code path.
pub trait Classifier {
    /// Identity used in output file names and comparison column headers.
    fn name(&self) -> &str;

    fn score(&self, text: &str) -> Polarity;

    /// How this classifier spells its labels in exported tables.
    fn render(&self, polarity: Polarity) -> &'static str {
        polarity.as_str()
    }
}

const POSITIVE_WORDS: &[&str] = &[
    "great", "good", "win", "wins", "won", "clutch", "amazing", "awesome", "love", "beautiful",
    "best", "unreal", "incredible", "dominant", "solid", "hero",
];

const NEGATIVE_WORDS: &[&str] = &[
    "bad", "awful", "terrible", "lose", "loses", "lost", "loss", "choke", "choked", "trash",
    "worst", "horrible", "pathetic", "soft", "blew", "embarrassing",
];

/// Signed valence sum over tokens; a non-negative compound score reads as
/// positive, mirroring the usual compound-score cutoff.
pub struct CompoundLexicon;

impl Classifier for CompoundLexicon {
    fn name(&self) -> &str {
        "compound"
    }

    fn score(&self, text: &str) -> Polarity {
        let mut compound = 0i32;
        for token in text.split_whitespace() {
            if POSITIVE_WORDS.contains(&token) {
                compound += 1;
            } else if NEGATIVE_WORDS.contains(&token) {
                compound -= 1;
            }
        }
        if compound >= 0 {
            Polarity::Pos
        } else {
            Polarity::Neg
        }
    }
}

/// Mean polarity over the tokens that hit the lexicon at all; texts with no
/// hits score 0.0 and read as positive. Renders title-case labels, the second
/// label scheme of the two reference scorers.
pub struct MeanPolarityLexicon;

impl Classifier for MeanPolarityLexicon {
    fn name(&self) -> &str {
        "polarity"
    }

    fn score(&self, text: &str) -> Polarity {
        let mut sum = 0.0f64;
        let mut hits = 0usize;
        for token in text.split_whitespace() {
            if POSITIVE_WORDS.contains(&token) {
                sum += 1.0;
                hits += 1;
            } else if NEGATIVE_WORDS.contains(&token) {
                sum -= 1.0;
                hits += 1;
            }
        }
        let mean = if hits == 0 { 0.0 } else { sum / hits as f64 };
        if mean >= 0.0 {
            Polarity::Pos
        } else {
            Polarity::Neg
        }
    }

    fn render(&self, polarity: Polarity) -> &'static str {
        match polarity {
            Polarity::Pos => "Pos",
            Polarity::Neg => "Neg",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compound_sums_valence_across_tokens() {
        let c = CompoundLexicon;
        assert_eq!(c.score("what a great clutch win"), Polarity::Pos);
        assert_eq!(c.score("awful terrible choke but one win"), Polarity::Neg);
    }

    #[test]
    fn neutral_text_reads_positive_under_both_scorers() {
        // Both reference scorers classify a zero score as positive.
        assert_eq!(CompoundLexicon.score("the game is at seven"), Polarity::Pos);
        assert_eq!(
            MeanPolarityLexicon.score("the game is at seven"),
            Polarity::Pos
        );
    }

    #[test]
    fn renderings_follow_each_scorers_label_scheme() {
        assert_eq!(CompoundLexicon.render(Polarity::Neg), "neg");
        assert_eq!(MeanPolarityLexicon.render(Polarity::Neg), "Neg");
        assert_eq!(MeanPolarityLexicon.render(Polarity::Pos), "Pos");
    }
}
