//! Per-kind record counts and the console summary line.

use crate::record::{SeedRecord, StaffRole};

/// Counts of generated records by kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecordSummary {
    /// Director accounts.
    pub users: usize,
    /// Students.
    pub students: usize,
    /// Lecturers.
    pub lecturers: usize,
    /// Non-teaching staff.
    pub support_staff: usize,
    /// Expenses.
    pub expenses: usize,
    /// Fee structures.
    pub fee_structures: usize,
}

impl RecordSummary {
    /// Tallies records by kind.
    ///
    /// # Example
    ///
    /// ```
    /// use campus_seed::{RecordSummary, SeedRecord, UserRole, UserSeed};
    ///
    /// let records = vec![SeedRecord::User(UserSeed {
    ///     email: "director@example.ac.ug".to_owned(),
    ///     password: "secret".to_owned(),
    ///     role: UserRole::Director,
    ///     is_active: true,
    /// })];
    ///
    /// assert_eq!(RecordSummary::from_records(&records).users, 1);
    /// ```
    #[must_use]
    pub fn from_records(records: &[SeedRecord]) -> Self {
        records.iter().fold(Self::default(), |mut summary, record| {
            let counter = match record {
                SeedRecord::User(_) => &mut summary.users,
                SeedRecord::Student(_) => &mut summary.students,
                SeedRecord::Staff(staff) if staff.role == StaffRole::Lecturer => {
                    &mut summary.lecturers
                }
                SeedRecord::Staff(_) => &mut summary.support_staff,
                SeedRecord::Expense(_) => &mut summary.expenses,
                SeedRecord::FeeStructure(_) => &mut summary.fee_structures,
            };
            *counter = counter.saturating_add(1);
            summary
        })
    }

    /// Total staff, teaching and non-teaching.
    #[must_use]
    pub const fn staff(&self) -> usize {
        self.lecturers.saturating_add(self.support_staff)
    }

    /// Total records counted.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.users
            .saturating_add(self.students)
            .saturating_add(self.staff())
            .saturating_add(self.expenses)
            .saturating_add(self.fee_structures)
    }

    /// Formats the human-readable line printed after a run.
    ///
    /// ```
    /// use campus_seed::RecordSummary;
    ///
    /// let summary = RecordSummary {
    ///     users: 1,
    ///     students: 1000,
    ///     lecturers: 300,
    ///     support_staff: 300,
    ///     expenses: 300,
    ///     fee_structures: 0,
    /// };
    ///
    /// assert_eq!(
    ///     summary.summary_line("seed_data.json"),
    ///     "Generated seed_data.json with 1 user, 1000 students, 600 staff \
    ///      (300 lecturers + 300 non-teaching), and 300 expenses."
    /// );
    /// ```
    #[must_use]
    pub fn summary_line(&self, output: &str) -> String {
        let mut parts = vec![
            counted(self.users, "user", "users"),
            counted(self.students, "student", "students"),
            format!(
                "{} staff ({} + {} non-teaching)",
                self.staff(),
                counted(self.lecturers, "lecturer", "lecturers"),
                self.support_staff
            ),
            counted(self.expenses, "expense", "expenses"),
        ];
        if self.fee_structures > 0 {
            parts.push(counted(
                self.fee_structures,
                "fee structure",
                "fee structures",
            ));
        }

        let listed = match parts.split_last() {
            Some((last, rest)) if !rest.is_empty() => format!("{}, and {last}", rest.join(", ")),
            Some((last, _)) => last.clone(),
            None => String::new(),
        };
        format!("Generated {output} with {listed}.")
    }
}

fn counted(count: usize, singular: &str, plural: &str) -> String {
    let noun = if count == 1 { singular } else { plural };
    format!("{count} {noun}")
}
