use crate::date::format_date;
use crate::model::DayReport;
use chrono::{Datelike, Weekday};

/// Permet de customiser le rendu d'un statut (texte, tableau, etc.).
pub trait StatusRenderer {
    fn render(&self, report: &DayReport) -> String;
}

/// Une ligne par jour : `DD/MM/YYYY  Seg  ALFA   FOLGA`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextStatus;

impl StatusRenderer for TextStatus {
    fn render(&self, report: &DayReport) -> String {
        let mut line = format!(
            "{date}  {weekday}  {roster:<5}  {status}",
            date = format_date(report.date),
            weekday = weekday_label(report.date.weekday()),
            roster = report.roster,
            status = report.status,
        );
        if let Some(name) = &report.holiday {
            line.push_str(&format!("  ({name})"));
        }
        line
    }
}

pub fn render_period(reports: &[DayReport], renderer: &dyn StatusRenderer) -> String {
    reports
        .iter()
        .map(|r| renderer.render(r) + "\n")
        .collect()
}

pub fn weekday_label(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Seg",
        Weekday::Tue => "Ter",
        Weekday::Wed => "Qua",
        Weekday::Thu => "Qui",
        Weekday::Fri => "Sex",
        Weekday::Sat => "Sab",
        Weekday::Sun => "Dom",
    }
}
