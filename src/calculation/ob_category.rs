//! The top-level OB category resolver.
//!
//! Resolution is a precedence chain: named storhelg holidays, named
//! kvalificerad holidays, weekends riding inside a storhelg window, partial
//! boundary days, plain weekends, lesser holidays on weekdays, Fridays, and
//! finally ordinary weekdays. The chain is expressed as an ordered rule
//! list evaluated top-down; the order is part of the agreement semantics
//! and reordering it changes pay classification.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::models::{BoundarySide, ObCategory, ObClass, ObRates, format_rate};

use super::ob_rates::ob_rates;
use super::partial_boundary::partial_storhelg_day;
use super::storhelg_membership::is_within_storhelg;
use super::storhelg_period::storhelg_period;

/// Holiday names (Swedish and Norwegian variants) that carry storhelg OB.
const STORHELG_HOLIDAY_NAMES: [&str; 18] = [
    "långfredagen",
    "langfredag",
    "påskafton",
    "påskdagen",
    "første påskedag",
    "annandag påsk",
    "andre påskedag",
    "nationaldagen",
    "midsommarafton",
    "midsommardagen",
    "julafton",
    "juldagen",
    "første juledag",
    "annandag jul",
    "andre juledag",
    "nyårsafton",
    "nyårsdagen",
    "nyttårsdag",
];

/// Holiday names that carry kvalificerad OB.
const KVALIFICERAD_HOLIDAY_NAMES: [&str; 5] = [
    "trettondedag jul",
    "första maj",
    "arbeidernes dag",
    "kristi himmelsfärdsdag",
    "kristi himmelfartsdag",
];

struct RuleContext<'a> {
    /// The holiday name as passed by the caller, if any.
    holiday_name: Option<&'a str>,
    /// Lowercased holiday name for substring matching; empty when absent.
    name: String,
    date: NaiveDate,
    rates: ObRates,
}

impl RuleContext<'_> {
    fn weekend_day_name(&self) -> Option<&'static str> {
        match self.date.weekday() {
            Weekday::Sat => Some("Lördag"),
            Weekday::Sun => Some("Söndag"),
            _ => None,
        }
    }
}

type Rule = fn(&RuleContext) -> Option<ObCategory>;

/// The precedence chain, highest priority first.
const RULES: [Rule; 8] = [
    storhelg_holiday,
    kvalificerad_holiday,
    weekend_within_window,
    boundary_day,
    plain_weekend,
    weekday_holiday,
    friday,
    ordinary_weekday,
];

/// Resolves the OB classification for one calendar day.
///
/// `holiday_name` is the (possibly merged) display name of the day's
/// holiday as produced by the holiday union view, or `None` for an
/// unmarked day. Resolution always succeeds; there is no error outcome.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use ob_engine::calculation::ob_category;
/// use ob_engine::models::ObClass;
///
/// let christmas_eve = NaiveDate::from_ymd_opt(2025, 12, 24).unwrap();
/// let category = ob_category(Some("Julafton"), christmas_eve);
/// assert_eq!(category.category, ObClass::Storhelg);
///
/// let ordinary_wednesday = NaiveDate::from_ymd_opt(2025, 8, 6).unwrap();
/// let category = ob_category(None, ordinary_wednesday);
/// assert_eq!(category.category, ObClass::Enkel);
/// ```
pub fn ob_category(holiday_name: Option<&str>, date: NaiveDate) -> ObCategory {
    let ctx = RuleContext {
        holiday_name,
        name: holiday_name.unwrap_or_default().to_lowercase(),
        date,
        rates: ob_rates(date),
    };

    RULES
        .iter()
        .find_map(|rule| rule(&ctx))
        .expect("the ordinary-weekday rule always matches")
}

/// Rule 1: a named storhelg holiday.
fn storhelg_holiday(ctx: &RuleContext) -> Option<ObCategory> {
    if !STORHELG_HOLIDAY_NAMES.iter().any(|h| ctx.name.contains(h)) {
        return None;
    }

    let period = ctx
        .holiday_name
        .and_then(|name| storhelg_period(name, ctx.date.year()));
    let period_text = period
        .map(|p| format!("\n\n📅 {}", p.description))
        .unwrap_or_default();

    Some(ObCategory {
        category: ObClass::Storhelg,
        label: "Storhelg OB".to_string(),
        icon: "⭐".to_string(),
        rate: ctx.rates.storhelg,
        is_partial: false,
        description: format!(
            "Obekväm arbetstid på storhelg\n\n\
             Enligt § 10 Mom 1 gäller storhelgs-OB för denna helgdag. \
             Detta är den högsta OB-ersättningen.{period_text}\n\n\
             OB-tillägg: {} kr/timme",
            format_rate(ctx.rates.storhelg)
        ),
    })
}

/// Rule 2: a named kvalificerad holiday.
fn kvalificerad_holiday(ctx: &RuleContext) -> Option<ObCategory> {
    if !KVALIFICERAD_HOLIDAY_NAMES.iter().any(|h| ctx.name.contains(h)) {
        return None;
    }

    Some(ObCategory {
        category: ObClass::Kvalificerad,
        label: "Kvalificerad OB".to_string(),
        icon: "🌙".to_string(),
        rate: ctx.rates.kvalificerad,
        is_partial: false,
        description: format!(
            "Kvalificerad obekväm tid\n\n\
             Enligt § 10 Mom 1 gäller kvalificerad OB från kl 19:00 dagen före \
             till kl 07:00 närmast följande vardag.\n\n\
             OB-tillägg: {} kr/timme",
            format_rate(ctx.rates.kvalificerad)
        ),
    })
}

/// Rule 3: a weekend day riding inside a storhelg window.
fn weekend_within_window(ctx: &RuleContext) -> Option<ObCategory> {
    let day_name = ctx.weekend_day_name()?;
    let period = is_within_storhelg(ctx.date)?;

    Some(ObCategory {
        category: ObClass::Storhelg,
        label: "Storhelg OB".to_string(),
        icon: "⭐".to_string(),
        rate: ctx.rates.storhelg,
        is_partial: false,
        description: format!(
            "Obekväm arbetstid på storhelg - {day_name}\n\n\
             Denna {} ingår i storhelgsperioden för {}.\n\n\
             📅 {}\n\n\
             OB-tillägg: {} kr/timme",
            day_name.to_lowercase(),
            period.label,
            period.description,
            format_rate(ctx.rates.storhelg)
        ),
    })
}

/// Rule 4: a partial boundary day next to a premium window.
fn boundary_day(ctx: &RuleContext) -> Option<ObCategory> {
    let mark = partial_storhelg_day(ctx.date)?;

    let is_kvalificerad = mark.category == Some(ObClass::Kvalificerad);
    let (class, base_label, icon, rate) = if is_kvalificerad {
        (ObClass::Kvalificerad, "Kvalificerad OB", "🌙", ctx.rates.kvalificerad)
    } else {
        (ObClass::Storhelg, "Storhelg OB", "⭐", ctx.rates.storhelg)
    };
    let side_text = match mark.side {
        BoundarySide::Before => "dagen innan",
        BoundarySide::After => "dagen efter",
    };

    Some(ObCategory {
        category: class,
        label: format!("{base_label} ({})", mark.time_text),
        icon: icon.to_string(),
        rate,
        is_partial: true,
        description: format!(
            "Delvis {}tid\n\n\
             Denna dag är {side_text} {}.\n\n\
             {base_label} gäller {}\n\n\
             OB-tillägg: {} kr/timme",
            base_label.to_lowercase(),
            mark.period,
            mark.time_text,
            format_rate(rate)
        ),
    })
}

/// Rule 5: a plain Saturday or Sunday.
fn plain_weekend(ctx: &RuleContext) -> Option<ObCategory> {
    let day_name = ctx.weekend_day_name()?;

    Some(ObCategory {
        category: ObClass::Kvalificerad,
        label: "Kvalificerad OB (Helg)".to_string(),
        icon: "🌙".to_string(),
        rate: ctx.rates.kvalificerad,
        is_partial: false,
        description: format!(
            "Kvalificerad obekväm tid - {day_name}\n\n\
             Enligt § 10 Mom 1 gäller kvalificerad OB från fredag kl 19:00 \
             till måndag kl 07:00.\n\n\
             Hela {}en räknas som kvalificerad obekväm tid.\n\n\
             OB-tillägg: {} kr/timme",
            day_name.to_lowercase(),
            format_rate(ctx.rates.kvalificerad)
        ),
    })
}

/// Rule 6: any other named holiday on a weekday.
fn weekday_holiday(ctx: &RuleContext) -> Option<ObCategory> {
    if !ctx.holiday_name.is_some_and(|name| !name.is_empty()) {
        return None;
    }

    Some(ObCategory {
        category: ObClass::Helgdag,
        label: "Helgdag".to_string(),
        icon: "📅".to_string(),
        rate: ctx.rates.kvalificerad,
        is_partial: false,
        description: format!(
            "Helgdag\n\n\
             Vanlig helgdag. OB-ersättning beror på vilken veckodag det infaller.\n\n\
             Kvällstid (19-22): {} kr/timme\n\
             Natt (22-06): {} kr/timme",
            format_rate(ctx.rates.enkel),
            format_rate(ctx.rates.kvalificerad)
        ),
    })
}

/// Rule 7: an ordinary Friday, split into OB and non-OB bands.
fn friday(ctx: &RuleContext) -> Option<ObCategory> {
    if ctx.date.weekday() != Weekday::Fri {
        return None;
    }

    Some(ObCategory {
        category: ObClass::Kvalificerad,
        label: "Fredag (kväll = Kvalificerad OB)".to_string(),
        icon: "🌆".to_string(),
        rate: ctx.rates.kvalificerad,
        is_partial: false,
        description: format!(
            "Fredag\n\n\
             Enligt § 10 Mom 1:\n\
             • Kl 00:00-06:00: Kvalificerad OB\n\
             • Kl 06:00-19:00: Ingen OB\n\
             • Kl 19:00-24:00: Kvalificerad OB\n\n\
             Enkel OB: {} kr/timme\n\
             Kvalificerad OB: {} kr/timme",
            format_rate(ctx.rates.enkel),
            format_rate(ctx.rates.kvalificerad)
        ),
    })
}

/// Rule 8: an ordinary weekday. Always matches.
fn ordinary_weekday(ctx: &RuleContext) -> Option<ObCategory> {
    Some(ObCategory {
        category: ObClass::Enkel,
        label: "Vardag".to_string(),
        icon: "📆".to_string(),
        rate: ctx.rates.enkel,
        is_partial: false,
        description: format!(
            "Vanlig vardag\n\n\
             Enligt § 10 Mom 1:\n\
             • Kl 06:00-19:00: Ingen OB\n\
             • Kl 19:00-22:00: Enkel OB\n\
             • Kl 22:00-06:00: Kvalificerad OB\n\n\
             Enkel OB: {} kr/timme\n\
             Kvalificerad OB: {} kr/timme",
            format_rate(ctx.rates.enkel),
            format_rate(ctx.rates.kvalificerad)
        ),
    })
}
