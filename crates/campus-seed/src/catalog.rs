//! Static reference tables sampled during generation.
//!
//! Every table here is process-wide immutable data. The generator only ever
//! borrows from these slices; nothing is built or mutated at runtime.

use crate::record::{FeeType, Semester};

/// Female first names.
pub static FEMALE_FIRST_NAMES: &[&str] = &[
    "Nakato",
    "Prossy",
    "Annet",
    "Gladys",
    "Sarah",
    "Mary",
    "Judith",
    "Patience",
    "Rebecca",
    "Esther",
    "Namagembe",
    "Nalweyiso",
    "Nabaggala",
    "Nakabugo",
    "Nalubega",
    "Nakimuli",
    "Nakawunde",
    "Nakazibwe",
];

/// Male first names.
pub static MALE_FIRST_NAMES: &[&str] = &[
    "Okello",
    "Mugisha",
    "Kato",
    "Ssebunya",
    "Mbabazi",
    "Nsamba",
    "Tumwine",
    "Wasswa",
    "Ssentongo",
    "Bbosa",
    "Ssekitto",
    "Nsubuga",
    "Lwanga",
    "Kyambadde",
    "Mukasa",
    "Ssebatta",
    "Nakibuuka",
    "Ssempijja",
];

/// Last names shared by every record kind.
pub static LAST_NAMES: &[&str] = &[
    "Mugisha",
    "Nakato",
    "Okello",
    "Namagembe",
    "Kato",
    "Ssebunya",
    "Mbabazi",
    "Nsamba",
    "Tumwine",
    "Wasswa",
    "Ssentongo",
    "Bbosa",
    "Ssekitto",
    "Nsubuga",
    "Lwanga",
    "Kyambadde",
    "Mukasa",
    "Ssebatta",
    "Nakibuuka",
    "Ssempijja",
    "Ahebwa",
    "Byamugisha",
    "Kabonesa",
    "Nabukenya",
    "Turyasiima",
];

/// Upper bound on any program's year of study.
pub const MAX_STUDY_YEAR: u8 = 4;

/// A degree or diploma program students can be enrolled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Program {
    /// Display name stored on the student record.
    pub name: &'static str,
    /// Highest year of study generated for this program.
    pub max_year: u8,
}

/// Program catalog.
///
/// The year caps keep the distribution the seed files have always had: the
/// first three programs are capped at years 1, 2 and 3 respectively.
pub static PROGRAMS: &[Program] = &[
    Program {
        name: "Bachelor of Science in Computer Science",
        max_year: 1,
    },
    Program {
        name: "Bachelor of Arts in Education",
        max_year: 2,
    },
    Program {
        name: "Bachelor of Medicine and Surgery",
        max_year: 3,
    },
    Program {
        name: "Bachelor of Business Administration",
        max_year: 4,
    },
    Program {
        name: "Bachelor of Laws",
        max_year: 4,
    },
    Program {
        name: "Bachelor of Engineering (Civil)",
        max_year: 4,
    },
    Program {
        name: "Bachelor of Agricultural Economics",
        max_year: 4,
    },
    Program {
        name: "Bachelor of Environmental Health",
        max_year: 4,
    },
    Program {
        name: "Bachelor of Nursing Science",
        max_year: 4,
    },
    Program {
        name: "Diploma in Information Technology",
        max_year: 4,
    },
];

/// Number of leading [`DEPARTMENTS`] entries that are academic faculties.
pub const ACADEMIC_DEPARTMENT_COUNT: usize = 9;

/// Department catalog. The first [`ACADEMIC_DEPARTMENT_COUNT`] entries are
/// faculties; the rest are administrative units.
pub static DEPARTMENTS: &[&str] = &[
    "Faculty of Computing & Informatics",
    "Faculty of Education",
    "Faculty of Medicine",
    "Faculty of Business & Management",
    "Faculty of Law",
    "Faculty of Engineering",
    "Faculty of Agriculture",
    "Faculty of Public Health",
    "Faculty of Social Sciences",
    "University Library",
    "Finance Office",
    "Registry",
    "ICT Department",
    "Maintenance Unit",
];

/// Returns the academic faculties lecturers may be assigned to.
#[must_use]
pub fn academic_departments() -> &'static [&'static str] {
    DEPARTMENTS
        .get(..ACADEMIC_DEPARTMENT_COUNT)
        .unwrap_or(DEPARTMENTS)
}

/// Expense category catalog.
pub static EXPENSE_CATEGORIES: &[&str] = &[
    "Office Supplies",
    "Utilities",
    "Salaries",
    "Maintenance",
    "Travel",
    "Research Grants",
    "Training",
    "Security",
    "Cleaning",
    "Internet Services",
];

/// Month names used in expense descriptions.
pub static MONTHS: &[&str] = &[
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A fee structure offered every academic year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeTemplate {
    /// Display name.
    pub name: &'static str,
    /// Fee kind.
    pub fee_type: FeeType,
    /// Amount in whole currency units.
    pub amount: u32,
    /// Year of study the fee applies to, if restricted.
    pub year: Option<u8>,
    /// Semester the fee is charged in.
    pub semester: Semester,
    /// Free-text description.
    pub description: &'static str,
}

/// Standard fee structures.
pub static FEE_TEMPLATES: &[FeeTemplate] = &[
    FeeTemplate {
        name: "Tuition Fee - Year 1",
        fee_type: FeeType::Tuition,
        amount: 2_500_000,
        year: Some(1),
        semester: Semester::First,
        description: "First year tuition fees",
    },
    FeeTemplate {
        name: "Tuition Fee - Year 2",
        fee_type: FeeType::Tuition,
        amount: 2_800_000,
        year: Some(2),
        semester: Semester::First,
        description: "Second year tuition fees",
    },
    FeeTemplate {
        name: "Tuition Fee - Year 3",
        fee_type: FeeType::Tuition,
        amount: 3_000_000,
        year: Some(3),
        semester: Semester::First,
        description: "Third year tuition fees",
    },
    FeeTemplate {
        name: "Accommodation - Hostel",
        fee_type: FeeType::Accommodation,
        amount: 800_000,
        year: None,
        semester: Semester::First,
        description: "University hostel accommodation per semester",
    },
    FeeTemplate {
        name: "Library Fee",
        fee_type: FeeType::Library,
        amount: 100_000,
        year: None,
        semester: Semester::First,
        description: "Annual library access fee",
    },
    FeeTemplate {
        name: "Laboratory Fee",
        fee_type: FeeType::Laboratory,
        amount: 150_000,
        year: None,
        semester: Semester::First,
        description: "Science lab usage fee",
    },
    FeeTemplate {
        name: "Registration Fee",
        fee_type: FeeType::Registration,
        amount: 50_000,
        year: None,
        semester: Semester::First,
        description: "Semester registration fee",
    },
    FeeTemplate {
        name: "Examination Fee",
        fee_type: FeeType::Examination,
        amount: 75_000,
        year: None,
        semester: Semester::First,
        description: "End of semester examination fee",
    },
    FeeTemplate {
        name: "School Trip - Lake Victoria",
        fee_type: FeeType::SchoolTrip,
        amount: 200_000,
        year: None,
        semester: Semester::Second,
        description: "Educational trip to Lake Victoria",
    },
    FeeTemplate {
        name: "Sports Fee",
        fee_type: FeeType::Sports,
        amount: 50_000,
        year: None,
        semester: Semester::First,
        description: "Sports and recreation fee",
    },
    FeeTemplate {
        name: "Medical Insurance",
        fee_type: FeeType::Medical,
        amount: 120_000,
        year: None,
        semester: Semester::First,
        description: "Student medical insurance cover",
    },
];

/// Email of the seeded director account.
pub const DIRECTOR_EMAIL: &str = "director@uguniversity.ac.ug";

/// Password stored verbatim on the director account.
pub const DIRECTOR_PASSWORD: &str = "hashedpassword123";
