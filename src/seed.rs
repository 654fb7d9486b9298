use anyhow::Result;
use argon2::password_hash::{SaltString, rand_core::OsRng};
use argon2::{Argon2, PasswordHasher};
use chrono::NaiveDate;
use migration::{Migrator, MigratorTrait};
use model::entities::prelude::{Admin, Course, Grade, Student};
use model::entities::{admin, course, grade, student};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, Set};
use tracing::{debug, info, instrument};

/// Default credentials created on first start.
const DEFAULT_ADMIN_USERNAME: &str = "admin";
const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// Bring the store up to date and load the sample fixtures.
///
/// Safe to run on every start: tables are created only if absent, the
/// default admin only if no admin exists, and each fixture set only when
/// its table is empty.
#[instrument(skip_all)]
pub async fn bootstrap(db: &DatabaseConnection) -> Result<()> {
    info!("Running database migrations");
    Migrator::up(db, None).await?;

    seed_admin(db).await?;
    seed_students(db).await?;
    seed_courses(db).await?;
    seed_grades(db).await?;

    Ok(())
}

async fn seed_admin(db: &DatabaseConnection) -> Result<()> {
    if Admin::find().count(db).await? > 0 {
        debug!("Admin account already present, skipping");
        return Ok(());
    }

    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(DEFAULT_ADMIN_PASSWORD.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!("failed to hash default admin password: {e}"))?
        .to_string();

    admin::ActiveModel {
        username: Set(DEFAULT_ADMIN_USERNAME.to_string()),
        password_hash: Set(password_hash),
        ..Default::default()
    }
    .insert(db)
    .await?;

    info!(
        "Default admin created: username='{DEFAULT_ADMIN_USERNAME}', password='{DEFAULT_ADMIN_PASSWORD}'"
    );
    Ok(())
}

async fn seed_students(db: &DatabaseConnection) -> Result<()> {
    if Student::find().count(db).await? > 0 {
        debug!("Students already present, skipping fixtures");
        return Ok(());
    }

    let sample_students = [
        (
            "John",
            "Doe",
            "john.doe@email.com",
            "(555) 123-4567",
            "123 Main Street, New York, NY 10001",
            fixture_date(2000, 5, 15),
            fixture_date(2023, 9, 1),
        ),
        (
            "Jane",
            "Smith",
            "jane.smith@email.com",
            "(555) 987-6543",
            "456 Oak Avenue, Los Angeles, CA 90210",
            fixture_date(1999, 12, 8),
            fixture_date(2023, 9, 1),
        ),
        (
            "Mike",
            "Johnson",
            "mike.johnson@email.com",
            "(555) 456-7890",
            "789 Pine Road, Chicago, IL 60601",
            fixture_date(2001, 3, 22),
            fixture_date(2023, 9, 15),
        ),
        (
            "Sarah",
            "Williams",
            "sarah.williams@email.com",
            "(555) 321-9876",
            "321 Elm Street, Houston, TX 77001",
            fixture_date(2000, 8, 10),
            fixture_date(2023, 8, 20),
        ),
        (
            "David",
            "Brown",
            "david.brown@email.com",
            "(555) 654-3210",
            "654 Maple Drive, Phoenix, AZ 85001",
            fixture_date(1998, 11, 5),
            fixture_date(2023, 9, 10),
        ),
        (
            "Emily",
            "Davis",
            "emily.davis@email.com",
            "(555) 789-0123",
            "987 Cedar Lane, Philadelphia, PA 19101",
            fixture_date(2001, 7, 18),
            fixture_date(2023, 9, 5),
        ),
    ];

    let count = sample_students.len();
    for (first_name, last_name, email, phone, address, date_of_birth, enrollment_date) in
        sample_students
    {
        student::ActiveModel {
            first_name: Set(first_name.to_string()),
            last_name: Set(last_name.to_string()),
            email: Set(email.to_string()),
            phone: Set(Some(phone.to_string())),
            address: Set(Some(address.to_string())),
            date_of_birth: Set(Some(date_of_birth)),
            enrollment_date: Set(enrollment_date),
            ..Default::default()
        }
        .insert(db)
        .await?;
    }

    info!("Added {count} sample students");
    Ok(())
}

async fn seed_courses(db: &DatabaseConnection) -> Result<()> {
    if Course::find().count(db).await? > 0 {
        debug!("Courses already present, skipping fixtures");
        return Ok(());
    }

    let sample_courses = [
        (
            "CS101",
            "Introduction to Computer Science",
            3,
            "Fundamental concepts of computer science including programming basics, algorithms, and data structures.",
        ),
        (
            "MATH201",
            "Calculus I",
            4,
            "Differential and integral calculus with applications to science and engineering.",
        ),
        (
            "ENG101",
            "English Composition",
            3,
            "Academic writing skills, critical thinking, and communication techniques.",
        ),
        (
            "PHYS101",
            "General Physics I",
            4,
            "Mechanics, thermodynamics, and wave motion with laboratory component.",
        ),
        (
            "CHEM101",
            "General Chemistry",
            4,
            "Atomic structure, chemical bonding, stoichiometry, and basic organic chemistry.",
        ),
        (
            "HIST101",
            "World History",
            3,
            "Survey of world civilizations from ancient times to the present.",
        ),
        (
            "BIO101",
            "Introduction to Biology",
            4,
            "Cell biology, genetics, evolution, and ecology with laboratory work.",
        ),
        (
            "ART101",
            "Art Appreciation",
            2,
            "Introduction to visual arts, art history, and aesthetic principles.",
        ),
    ];

    let count = sample_courses.len();
    for (course_code, course_name, credits, description) in sample_courses {
        course::ActiveModel {
            course_code: Set(course_code.to_string()),
            course_name: Set(course_name.to_string()),
            credits: Set(credits),
            description: Set(Some(description.to_string())),
            ..Default::default()
        }
        .insert(db)
        .await?;
    }

    info!("Added {count} sample courses");
    Ok(())
}

async fn seed_grades(db: &DatabaseConnection) -> Result<()> {
    if Grade::find().count(db).await? > 0 {
        debug!("Grades already present, skipping fixtures");
        return Ok(());
    }

    // Fixture grades reference seeded students/courses by position, so ids
    // stay valid even when the store did not assign them from 1.
    let students = Student::find().all(db).await?;
    let courses = Course::find().all(db).await?;
    if students.is_empty() || courses.is_empty() {
        debug!("No students or courses to grade, skipping fixtures");
        return Ok(());
    }

    let sample_grades: [(usize, usize, &str); 10] = [
        (0, 0, "A"),
        (0, 1, "B+"),
        (1, 0, "A-"),
        (1, 2, "A"),
        (2, 0, "B"),
        (2, 3, "B+"),
        (3, 1, "A"),
        (3, 4, "A-"),
        (4, 2, "B+"),
        (5, 0, "A"),
    ];

    let mut count = 0;
    for (student_idx, course_idx, letter_grade) in sample_grades {
        let (Some(student), Some(course)) = (students.get(student_idx), courses.get(course_idx))
        else {
            continue;
        };

        grade::ActiveModel {
            student_id: Set(student.id),
            course_id: Set(course.id),
            letter_grade: Set(Some(letter_grade.to_string())),
            semester: Set(Some("Fall 2023".to_string())),
            academic_year: Set(Some("2023-2024".to_string())),
            ..Default::default()
        }
        .insert(db)
        .await?;
        count += 1;
    }

    info!("Added {count} sample grades");
    Ok(())
}

fn fixture_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("fixture dates are valid")
}
