use chrono::{Datelike, NaiveDate, Weekday};

const MONTHS: [&str; 12] = [
    "jan.", "fev.", "mar.", "abr.", "mai.", "jun.", "jul.", "ago.", "set.", "out.", "nov.", "dez.",
];

/// pt-BR label for the selected day: `Hoje, 16 de jan.`, `Amanhã, 17 de jan.`
/// or `Sábado, 18 de jan.`
pub fn date_label(date: NaiveDate, today: NaiveDate) -> String {
    let day_month = format!("{} de {}", date.day(), MONTHS[date.month0() as usize]);

    if date == today {
        format!("Hoje, {}", day_month)
    } else if today.succ_opt() == Some(date) {
        format!("Amanhã, {}", day_month)
    } else {
        format!("{}, {}", capitalize(weekday_name(date.weekday())), day_month)
    }
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "segunda-feira",
        Weekday::Tue => "terça-feira",
        Weekday::Wed => "quarta-feira",
        Weekday::Thu => "quinta-feira",
        Weekday::Fri => "sexta-feira",
        Weekday::Sat => "sábado",
        Weekday::Sun => "domingo",
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
