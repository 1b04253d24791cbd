//! CLI entry point for local development chores.
//!
//! # Responsibility
//! - `seed [path]`: populate a database with sample departments/employees.
//! - Default invocation: print a core-version probe line for wiring checks.

use rand::seq::SliceRandom;
use rand::Rng;
use staffdir_core::db::open_db;
use staffdir_core::repo::employee_repo::{EmployeeRepository, SqliteEmployeeRepository};
use staffdir_core::{hash_password, AddressInput, CreateEmployeeRequest};
use std::error::Error;
use std::process::ExitCode;

const NUM_DEPARTMENTS: usize = 5;
const NUM_EMPLOYEES: usize = 50;
const DEFAULT_DB_PATH: &str = "./staffdir.db";

const FIRST_NAMES: &[&str] = &[
    "Aisyah", "Chong", "Daniel", "Farah", "Hakim", "Jasmine", "Kavita", "Liang", "Mei", "Nurul",
    "Omar", "Priya", "Ravi", "Siti", "Wei",
];
const LAST_NAMES: &[&str] = &[
    "Abdullah", "Chen", "Gopal", "Hassan", "Ibrahim", "Lee", "Lim", "Muthu", "Ng", "Ong",
    "Rahman", "Tan", "Wong", "Yap", "Yusof",
];
const CITIES: &[&str] = &[
    "Kuala Lumpur", "Penang", "Johor Bahru", "Ipoh", "Kuching", "Kota Kinabalu", "Melaka",
];
const STATES: &[&str] = &[
    "Selangor", "Penang", "Johor", "Perak", "Sarawak", "Sabah", "Melaka",
];
const ROLES: &[&str] = &[
    "Software Engineer", "Product Manager", "Accountant", "HR Executive", "Designer",
    "Data Analyst",
];
const DEPARTMENTS: &[(&str, &str)] = &[
    ("Engineering", "Builds and operates the product"),
    ("Finance", "Keeps the books balanced"),
    ("People", "Hiring, onboarding and wellbeing"),
    ("Design", "Product and brand design"),
    ("Operations", "Keeps the office running"),
];

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let result = match args.first().map(String::as_str) {
        Some("seed") => seed(args.get(1).map(String::as_str).unwrap_or(DEFAULT_DB_PATH)),
        Some(other) => {
            eprintln!("unknown command `{other}`; usage: staffdir_cli [seed [db_path]]");
            return ExitCode::FAILURE;
        }
        None => {
            println!("staffdir_core version={}", staffdir_core::core_version());
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn seed(db_path: &str) -> Result<(), Box<dyn Error>> {
    let conn = open_db(db_path)?;
    let repo = SqliteEmployeeRepository::new(&conn);
    let mut rng = rand::thread_rng();

    for (name, description) in DEPARTMENTS.iter().take(NUM_DEPARTMENTS) {
        let id = repo.create_department(name, Some(description))?;
        println!("seed `department` id={id} name={name} - ok");
    }

    for index in 0..NUM_EMPLOYEES {
        let request = sample_employee(&mut rng, index);
        let password_hash = hash_password("changeme-dev-only")?;
        let view = repo.create_employee(&request, &password_hash, None)?;
        println!(
            "seed `employee` id={} username={} - ok",
            view.employee_id, view.user.username
        );
    }

    println!("seeded {NUM_DEPARTMENTS} departments and {NUM_EMPLOYEES} employees into {db_path}");
    Ok(())
}

fn sample_employee(rng: &mut impl Rng, index: usize) -> CreateEmployeeRequest {
    let first = pick(rng, FIRST_NAMES);
    let last = pick(rng, LAST_NAMES);
    let username = format!("{}.{}{index}", first.to_lowercase(), last.to_lowercase());
    let city_index = rng.gen_range(0..CITIES.len());

    CreateEmployeeRequest {
        email: format!("{username}@example.com"),
        username,
        password: "changeme-dev-only".to_string(),
        phone_number: sample_phone(rng),
        first_name: first.to_string(),
        last_name: last.to_string(),
        gender: (if rng.gen_bool(0.5) { "female" } else { "male" }).to_string(),
        dob: sample_date(rng, 1970, 2000),
        salary: Some((rng.gen_range(2500.0..9000.0_f64) * 100.0).round() / 100.0),
        role: pick(rng, ROLES).to_string(),
        start_at: sample_date(rng, 2015, 2024),
        end_at: None,
        avatar_image: None,
        address: Some(AddressInput {
            city: CITIES[city_index].to_string(),
            line1: format!("{} Jalan Merpati", rng.gen_range(1..200)),
            line2: None,
            state: STATES[city_index % STATES.len()].to_string(),
            country: "Malaysia".to_string(),
            postal_code: format!("{:05}", rng.gen_range(10000..90000)),
        }),
        department: Some(DEPARTMENTS[rng.gen_range(0..NUM_DEPARTMENTS)].0.to_string()),
    }
}

fn pick<'a>(rng: &mut impl Rng, pool: &'a [&'a str]) -> &'a str {
    pool.choose(rng).copied().unwrap_or("unset")
}

fn sample_phone(rng: &mut impl Rng) -> String {
    // Malaysian mobile shape the core's validation accepts.
    let prefix_digits: &[char] = &['0', '1', '2', '3', '4', '6', '7', '8', '9'];
    let second = prefix_digits[rng.gen_range(0..prefix_digits.len())];
    format!("01{second}-{:07}", rng.gen_range(0..10_000_000))
}

fn sample_date(rng: &mut impl Rng, min_year: i32, max_year: i32) -> String {
    format!(
        "{}-{:02}-{:02}",
        rng.gen_range(min_year..=max_year),
        rng.gen_range(1..=12),
        rng.gen_range(1..=28)
    )
}
