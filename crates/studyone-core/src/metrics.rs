//! Derived metrics.
//!
//! Pure functions over already-loaded lists. Nothing here owns stored
//! state; everything is recomputed on demand from the repositories'
//! current data.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::model::{Deck, Exam, JobApplication, JobStatus, Note, Task};
use crate::streak::StreakRecord;

/// Aggregate counts for the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    pub notes: usize,
    pub open_tasks: usize,
    pub completed_tasks: usize,
    pub upcoming_exams: usize,
    pub active_applications: usize,
    pub total_cards: usize,
    pub current_streak: u32,
}

pub fn summarize(
    notes: &[Note],
    tasks: &[Task],
    exams: &[Exam],
    jobs: &[JobApplication],
    decks: &[Deck],
    streak: &StreakRecord,
    today: NaiveDate,
) -> DashboardSummary {
    DashboardSummary {
        notes: notes.len(),
        open_tasks: tasks.iter().filter(|t| !t.completed).count(),
        completed_tasks: tasks.iter().filter(|t| t.completed).count(),
        upcoming_exams: upcoming_exams(exams, today).len(),
        active_applications: jobs
            .iter()
            .filter(|j| j.status != JobStatus::Rejected)
            .count(),
        total_cards: decks.iter().map(|d| d.cards.len()).sum(),
        current_streak: streak.current_streak(today),
    }
}

/// Open tasks due on or before `date`.
pub fn tasks_due_by(tasks: &[Task], date: NaiveDate) -> Vec<&Task> {
    tasks
        .iter()
        .filter(|t| !t.completed)
        .filter(|t| matches!(t.due_date, Some(due) if due <= date))
        .collect()
}

/// Exams dated today or later, soonest first.
pub fn upcoming_exams(exams: &[Exam], today: NaiveDate) -> Vec<&Exam> {
    let mut upcoming: Vec<&Exam> = exams.iter().filter(|e| e.date >= today).collect();
    upcoming.sort_by_key(|e| e.date);
    upcoming
}

/// Application counts per pipeline stage.
pub fn jobs_by_status(jobs: &[JobApplication]) -> BTreeMap<JobStatus, usize> {
    let mut counts = BTreeMap::new();
    for job in jobs {
        *counts.entry(job.status).or_insert(0) += 1;
    }
    counts
}

/// An unlocked achievement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Achievement {
    pub id: &'static str,
    pub title: &'static str,
}

/// Achievements unlocked by the current data. Recomputed on demand; there
/// is no persisted unlock state.
pub fn achievements(
    notes: &[Note],
    tasks: &[Task],
    exams: &[Exam],
    streak: &StreakRecord,
    today: NaiveDate,
) -> Vec<Achievement> {
    let mut unlocked = Vec::new();
    if !notes.is_empty() {
        unlocked.push(Achievement {
            id: "first_note",
            title: "First note written",
        });
    }
    if tasks.iter().filter(|t| t.completed).count() >= 10 {
        unlocked.push(Achievement {
            id: "ten_tasks",
            title: "Ten tasks completed",
        });
    }
    if streak.current_streak(today) >= 7 {
        unlocked.push(Achievement {
            id: "week_streak",
            title: "Seven-day streak",
        });
    }
    if exams
        .iter()
        .any(|e| !e.syllabus.is_empty() && e.syllabus.iter().all(|s| s.completed))
    {
        unlocked.push(Achievement {
            id: "syllabus_done",
            title: "Syllabus fully covered",
        });
    }
    unlocked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Card, SyllabusItem};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn summary_counts() {
        let notes = vec![Note::new("a", "")];
        let mut tasks = vec![Task::new("x"), Task::new("y")];
        tasks[0].completed = true;
        let exams = vec![
            Exam::new("Final", "Physics", day(2024, 6, 20)),
            Exam::new("Past", "History", day(2024, 1, 10)),
        ];
        let mut jobs = vec![
            JobApplication::new("Acme", "Engineer", day(2024, 3, 1)),
            JobApplication::new("Globex", "Analyst", day(2024, 3, 2)),
        ];
        jobs[1].status = JobStatus::Rejected;
        let mut deck = Deck::new("Latin");
        deck.add_card(Card::new("aqua", "water"));
        let mut streak = StreakRecord::default();
        streak.record_completion(day(2024, 3, 11));

        let summary = summarize(
            &notes,
            &tasks,
            &exams,
            &jobs,
            &[deck],
            &streak,
            day(2024, 3, 11),
        );
        assert_eq!(summary.notes, 1);
        assert_eq!(summary.open_tasks, 1);
        assert_eq!(summary.completed_tasks, 1);
        assert_eq!(summary.upcoming_exams, 1);
        assert_eq!(summary.active_applications, 1);
        assert_eq!(summary.total_cards, 1);
        assert_eq!(summary.current_streak, 1);
    }

    #[test]
    fn due_tasks_exclude_completed_and_undated() {
        let mut tasks = vec![Task::new("a"), Task::new("b"), Task::new("c")];
        tasks[0].due_date = Some(day(2024, 3, 10));
        tasks[1].due_date = Some(day(2024, 3, 10));
        tasks[1].completed = true;
        let due = tasks_due_by(&tasks, day(2024, 3, 11));
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].text, "a");
    }

    #[test]
    fn upcoming_exams_sorted_soonest_first() {
        let exams = vec![
            Exam::new("B", "s", day(2024, 7, 1)),
            Exam::new("A", "s", day(2024, 6, 1)),
        ];
        let upcoming = upcoming_exams(&exams, day(2024, 5, 1));
        assert_eq!(upcoming[0].name, "A");
        assert_eq!(upcoming[1].name, "B");
    }

    #[test]
    fn jobs_grouped_by_status() {
        let mut jobs = vec![
            JobApplication::new("a", "p", day(2024, 3, 1)),
            JobApplication::new("b", "p", day(2024, 3, 1)),
            JobApplication::new("c", "p", day(2024, 3, 1)),
        ];
        jobs[2].status = JobStatus::Offer;
        let counts = jobs_by_status(&jobs);
        assert_eq!(counts[&JobStatus::Applied], 2);
        assert_eq!(counts[&JobStatus::Offer], 1);
    }

    #[test]
    fn achievements_unlock_from_data() {
        let mut exam = Exam::new("Final", "Physics", day(2024, 6, 20));
        exam.syllabus.push(SyllabusItem::new("Waves"));
        exam.syllabus[0].completed = true;
        let mut streak = StreakRecord {
            count: 7,
            last_date: Some(day(2024, 3, 11)),
            history: Default::default(),
        };
        streak.record_completion(day(2024, 3, 11));

        let unlocked = achievements(
            &[Note::new("n", "")],
            &[],
            &[exam],
            &streak,
            day(2024, 3, 11),
        );
        let ids: Vec<_> = unlocked.iter().map(|a| a.id).collect();
        assert!(ids.contains(&"first_note"));
        assert!(ids.contains(&"week_streak"));
        assert!(ids.contains(&"syllabus_done"));
        assert!(!ids.contains(&"ten_tasks"));
    }
}
