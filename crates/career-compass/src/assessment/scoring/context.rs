//! Context fit: class rank, family views, vocational and long-study preferences, dream career.

use super::rules::{Adjustment, Rule, RuleInput, Signal};
use crate::assessment::domain::{ClassRank, LongStudyWillingness, VocationalPreference};
use crate::assessment::keywords::{sentences, KeywordError, KeywordMatcher, TokenizedText};

pub(crate) const CONTEXT_RULES: [Rule; 6] = [
    class_rank,
    family_support,
    family_opposition,
    vocational_preference,
    long_study,
    dream_career,
];

const POSITIVE_TERMS: &[&str] = &[
    "support",
    "supportive",
    "encourage",
    "proud",
    "want me",
    "wants me",
    "like",
    "love",
    "respect",
    "prefer",
    "happy",
    "good",
    "great",
    "recommend",
    "suggest",
];

const NEGATIVE_TERMS: &[&str] = &[
    "against",
    "oppose",
    "opposed",
    "disapprove",
    "dont want",
    "do not want",
    "does not want",
    "doesnt want",
    "dont like",
    "do not like",
    "dislike",
    "hate",
    "worried",
    "worry",
    "not safe",
    "no scope",
    "no future",
    "forbid",
    "not allowed",
    "reject",
    "waste",
    "unhappy",
    "discourage",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum Sentiment {
    Neutral,
    Positive,
    Negative,
}

impl Sentiment {
    /// Negative outweighs positive, which outweighs neutral.
    fn strongest<I: IntoIterator<Item = Sentiment>>(views: I) -> Option<Sentiment> {
        views.into_iter().max()
    }
}

/// Positive and negative family terms, compiled once per engine.
#[derive(Debug, Clone)]
pub(crate) struct FamilyLexicon {
    positive: KeywordMatcher,
    negative: KeywordMatcher,
}

impl FamilyLexicon {
    pub(crate) fn compile() -> Result<Self, KeywordError> {
        Ok(Self {
            positive: KeywordMatcher::new(POSITIVE_TERMS)?,
            negative: KeywordMatcher::new(NEGATIVE_TERMS)?,
        })
    }

    /// Negative terms win so that "don't want" is never read as "want".
    fn sentiment(&self, text: &TokenizedText) -> Sentiment {
        if self.negative.matches(text) {
            Sentiment::Negative
        } else if self.positive.matches(text) {
            Sentiment::Positive
        } else {
            Sentiment::Neutral
        }
    }

    /// Reads the family-views answer into sentences and clauses with their sentiment.
    pub(crate) fn read(&self, answer: &str) -> FamilyStatement {
        let sentences = sentences(answer)
            .map(|sentence| {
                let text = TokenizedText::new(sentence);
                FamilySentence {
                    sentiment: self.sentiment(&text),
                    text,
                    clauses: TokenizedText::clauses(sentence)
                        .into_iter()
                        .map(|clause| (self.sentiment(&clause), clause))
                        .collect(),
                }
            })
            .collect();

        FamilyStatement {
            whole: TokenizedText::new(answer),
            sentences,
        }
    }
}

#[derive(Debug, Clone)]
struct FamilySentence {
    text: TokenizedText,
    sentiment: Sentiment,
    clauses: Vec<(Sentiment, TokenizedText)>,
}

impl FamilySentence {
    /// A clause naming the career with its own sentiment decides; otherwise the sentence does,
    /// so "Doctor, my parents support that" still reads as support.
    fn view_of(&self, career: &KeywordMatcher) -> Sentiment {
        let clause_views = self
            .clauses
            .iter()
            .filter(|(sentiment, clause)| {
                *sentiment != Sentiment::Neutral && career.matches(clause)
            })
            .map(|(sentiment, _)| *sentiment);
        Sentiment::strongest(clause_views).unwrap_or(self.sentiment)
    }
}

/// The family-views answer, tokenized once per scoring run.
#[derive(Debug, Clone, Default)]
pub(crate) struct FamilyStatement {
    whole: TokenizedText,
    sentences: Vec<FamilySentence>,
}

impl FamilyStatement {
    /// How the family regards a career: neutral unless the answer mentions it.
    pub(crate) fn view_of(&self, career: &KeywordMatcher) -> Sentiment {
        if !career.matches(&self.whole) {
            return Sentiment::Neutral;
        }

        let views = self
            .sentences
            .iter()
            .filter(|sentence| career.matches(&sentence.text))
            .map(|sentence| sentence.view_of(career));
        Sentiment::strongest(views).unwrap_or(Sentiment::Neutral)
    }
}

fn family_view(ctx: &RuleInput<'_>) -> Sentiment {
    ctx.signals.family.view_of(&ctx.matchers.topical)
}

fn class_rank(ctx: &RuleInput<'_>) -> Option<Adjustment> {
    if !ctx.config.is_competitive(&ctx.career.bucket) {
        return None;
    }

    match ctx.input.class_rank() {
        ClassRank::Top1 | ClassRank::Top5 => Some(Adjustment {
            signal: Signal::ClassRank,
            delta: ctx.config.class_rank_bonus,
            reason: format!(
                "Your class rank suits the competitive {} track.",
                ctx.career.bucket
            ),
        }),
        ClassRank::BelowAverage => Some(Adjustment {
            signal: Signal::ClassRank,
            delta: ctx.config.class_rank_penalty,
            reason: format!(
                "{} entrance is highly competitive for your current class rank.",
                ctx.career.bucket
            ),
        }),
        ClassRank::Top10 | ClassRank::Average | ClassRank::Unspecified => None,
    }
}

fn family_support(ctx: &RuleInput<'_>) -> Option<Adjustment> {
    (family_view(ctx) == Sentiment::Positive).then(|| Adjustment {
        signal: Signal::FamilySupport,
        delta: ctx.config.family_support_bonus,
        reason: format!("Your family and community support {}.", ctx.career.name),
    })
}

fn family_opposition(ctx: &RuleInput<'_>) -> Option<Adjustment> {
    (family_view(ctx) == Sentiment::Negative).then(|| Adjustment {
        signal: Signal::FamilyOpposition,
        delta: ctx.config.family_opposition_penalty,
        reason: format!(
            "Your family or community has concerns about {}.",
            ctx.career.name
        ),
    })
}

fn vocational_preference(ctx: &RuleInput<'_>) -> Option<Adjustment> {
    if !ctx.career.vocational {
        return None;
    }

    match ctx.input.vocational_preference() {
        VocationalPreference::YesDefinitely => Some(Adjustment {
            signal: Signal::VocationalPreference,
            delta: ctx.config.vocational_bonus,
            reason: "You are keen on a skills-first vocational route.".to_string(),
        }),
        VocationalPreference::No => Some(Adjustment {
            signal: Signal::VocationalPreference,
            delta: ctx.config.vocational_penalty,
            reason: "You prefer not to take a vocational route.".to_string(),
        }),
        VocationalPreference::Maybe | VocationalPreference::Unspecified => None,
    }
}

fn long_study(ctx: &RuleInput<'_>) -> Option<Adjustment> {
    let unwilling = ctx.input.long_study_willingness() == LongStudyWillingness::No;
    (unwilling && ctx.career.long_duration_degree).then(|| Adjustment {
        signal: Signal::LongStudy,
        delta: ctx.config.long_study_penalty,
        reason: format!(
            "{} needs many years of study, which you said you would rather avoid.",
            ctx.career.name
        ),
    })
}

fn dream_career(ctx: &RuleInput<'_>) -> Option<Adjustment> {
    ctx.matchers
        .identity
        .matches(&ctx.signals.dream)
        .then(|| Adjustment {
            signal: Signal::DreamCareer,
            delta: ctx.config.dream_career_bonus,
            reason: format!("{} matches the dream career you described.", ctx.career.name),
        })
}
