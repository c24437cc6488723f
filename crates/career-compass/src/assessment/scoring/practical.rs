//! Practical fit: what the student said they enjoy (e_12) and which jobs they do not want (e_13).

use super::rules::{Adjustment, Rule, RuleInput, Signal};

pub(crate) const PRACTICAL_RULES: [Rule; 2] = [rejected_jobs, enjoyed_activities];

fn rejected_jobs(ctx: &RuleInput<'_>) -> Option<Adjustment> {
    let keyword = ctx.matchers.topical.first_match(&ctx.signals.rejected)?;
    Some(Adjustment {
        signal: Signal::RejectedJobs,
        delta: ctx.config.rejected_job_penalty,
        reason: format!("You said you do not want work involving '{keyword}'."),
    })
}

fn enjoyed_activities(ctx: &RuleInput<'_>) -> Option<Adjustment> {
    let keyword = ctx.matchers.topical.first_match(&ctx.signals.enjoyed)?;
    Some(Adjustment {
        signal: Signal::EnjoyedActivities,
        delta: ctx.config.enjoyed_activity_bonus,
        reason: format!(
            "You enjoy {keyword}, which is central to {}.",
            ctx.career.name
        ),
    })
}
