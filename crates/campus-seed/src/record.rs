//! Generated seed record types.
//!
//! Every record serializes as `{"model": "<Kind>", "data": {...}}` so the
//! importer can dispatch on the model name. Field names are camelCase and
//! enum values use the database's SCREAMING_SNAKE_CASE vocabulary.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Account role for seeded users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    /// University director with full access.
    Director,
}

/// Enrolment status of a student.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StudentStatus {
    /// Currently enrolled.
    #[default]
    Active,
    /// Enrolment deferred.
    Deferred,
    /// No longer enrolled.
    Dropped,
}

/// Job role of a staff member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StaffRole {
    /// Teaching staff.
    Lecturer,
    /// Administrative staff.
    Admin,
    /// Cleaning staff.
    Cleaner,
    /// Security staff.
    Security,
    /// Any other non-teaching role.
    Other,
}

impl StaffRole {
    /// Roles drawn for non-teaching staff.
    pub const NON_TEACHING: [Self; 4] = [Self::Admin, Self::Cleaner, Self::Security, Self::Other];

    /// Returns `true` for teaching roles.
    #[must_use]
    pub const fn is_teaching(self) -> bool {
        matches!(self, Self::Lecturer)
    }
}

/// Employment status of a staff member.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StaffStatus {
    /// Currently employed.
    #[default]
    Active,
    /// Temporarily suspended.
    Suspended,
    /// Left the university.
    Exited,
}

/// Approval state of an expense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExpenseStatus {
    /// Awaiting review.
    Pending,
    /// Approved but not yet paid.
    Approved,
    /// Rejected during review.
    Rejected,
    /// Settled.
    Paid,
}

impl ExpenseStatus {
    /// Every expense status, in catalog order.
    pub const ALL: [Self; 4] = [Self::Pending, Self::Approved, Self::Rejected, Self::Paid];
}

/// Kind of fee a fee structure charges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeeType {
    /// Tuition for a year of study.
    Tuition,
    /// Hostel accommodation.
    Accommodation,
    /// Library access.
    Library,
    /// Laboratory usage.
    Laboratory,
    /// Semester registration.
    Registration,
    /// Examinations.
    Examination,
    /// Educational trips.
    SchoolTrip,
    /// Sports and recreation.
    Sports,
    /// Medical cover.
    Medical,
    /// Anything else.
    Other,
}

/// Academic semester a fee is charged in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Semester {
    /// First semester.
    #[serde(rename = "SEMESTER_1")]
    First,
    /// Second semester.
    #[serde(rename = "SEMESTER_2")]
    Second,
    /// Third (recess) semester.
    #[serde(rename = "SEMESTER_3")]
    Third,
}

/// Seeded login account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSeed {
    /// Login email.
    pub email: String,
    /// Password stored as given; the importer does not hash it.
    pub password: String,
    /// Account role.
    pub role: UserRole,
    /// Whether the account can log in.
    pub is_active: bool,
}

/// Seeded student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentSeed {
    /// Registration number, `S` followed by a zero-padded sequence.
    pub student_no: String,
    /// First and last name.
    pub full_name: String,
    /// Enrolled program name.
    pub program: String,
    /// Year of study, starting at 1.
    pub year: u8,
    /// Enrolment status.
    pub status: StudentStatus,
}

/// Seeded staff member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffSeed {
    /// Name, optionally prefixed with `Dr.`.
    pub full_name: String,
    /// Job role.
    pub role: StaffRole,
    /// Department or faculty.
    pub department: String,
    /// Monthly salary in whole currency units.
    pub salary: u32,
    /// Date of birth.
    #[serde(with = "midnight_utc")]
    pub dob: NaiveDate,
    /// Employment start date.
    #[serde(with = "midnight_utc")]
    pub start_date: NaiveDate,
    /// Employment status.
    pub status: StaffStatus,
}

/// Seeded expense claim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseSeed {
    /// Expense category.
    pub category: String,
    /// Free-text description.
    pub description: String,
    /// Amount in whole currency units.
    pub amount: u32,
    /// Approval state.
    pub status: ExpenseStatus,
}

/// Seeded fee structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeStructureSeed {
    /// Display name.
    pub name: String,
    /// Fee kind.
    pub fee_type: FeeType,
    /// Amount in whole currency units.
    pub amount: u32,
    /// Year of study the fee applies to, if restricted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u8>,
    /// Semester the fee is charged in.
    pub semester: Semester,
    /// Academic year label such as `2025/2026`.
    pub academic_year: String,
    /// Free-text description.
    pub description: String,
    /// Whether the fee is currently charged.
    pub is_active: bool,
}

/// One generated record, tagged with its model name.
///
/// # Example
///
/// ```
/// use campus_seed::{SeedRecord, UserRole, UserSeed};
///
/// let record = SeedRecord::User(UserSeed {
///     email: "director@example.ac.ug".to_owned(),
///     password: "secret".to_owned(),
///     role: UserRole::Director,
///     is_active: true,
/// });
/// let json = serde_json::to_value(&record).expect("serialize");
///
/// assert_eq!(json["model"], "User");
/// assert_eq!(json["data"]["role"], "DIRECTOR");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "model", content = "data")]
pub enum SeedRecord {
    /// A login account.
    User(UserSeed),
    /// A student.
    Student(StudentSeed),
    /// A staff member.
    Staff(StaffSeed),
    /// An expense claim.
    Expense(ExpenseSeed),
    /// A fee structure.
    FeeStructure(FeeStructureSeed),
}

impl SeedRecord {
    /// Returns the model name written to the `model` field.
    #[must_use]
    pub const fn model(&self) -> &'static str {
        match self {
            Self::User(_) => "User",
            Self::Student(_) => "Student",
            Self::Staff(_) => "Staff",
            Self::Expense(_) => "Expense",
            Self::FeeStructure(_) => "FeeStructure",
        }
    }
}

/// Serializes dates as midnight UTC timestamps with millisecond precision.
mod midnight_utc {
    use chrono::{NaiveDate, NaiveDateTime};
    use serde::{Deserialize, Deserializer, Serializer, de};

    const WRITE_FORMAT: &str = "%Y-%m-%dT00:00:00.000Z";
    const READ_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

    pub(super) fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&date.format(WRITE_FORMAT))
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, READ_FORMAT)
            .map(|timestamp| timestamp.date())
            .map_err(de::Error::custom)
    }
}
