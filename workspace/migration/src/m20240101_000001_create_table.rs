use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create admins table
        manager
            .create_table(
                Table::create()
                    .table(Admins::Table)
                    .if_not_exists()
                    .col(pk_auto(Admins::Id))
                    .col(string(Admins::Username).unique_key())
                    .col(string(Admins::PasswordHash))
                    .to_owned(),
            )
            .await?;

        // Create students table
        manager
            .create_table(
                Table::create()
                    .table(Students::Table)
                    .if_not_exists()
                    .col(pk_auto(Students::Id))
                    .col(string(Students::FirstName))
                    .col(string(Students::LastName))
                    .col(string(Students::Email).unique_key())
                    .col(string_null(Students::Phone))
                    .col(string_null(Students::Address))
                    .col(date_null(Students::DateOfBirth))
                    .col(date(Students::EnrollmentDate))
                    .to_owned(),
            )
            .await?;

        // Create courses table
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(pk_auto(Courses::Id))
                    .col(string(Courses::CourseCode).unique_key())
                    .col(string(Courses::CourseName))
                    .col(integer(Courses::Credits).default(3))
                    .col(string_null(Courses::Description))
                    .to_owned(),
            )
            .await?;

        // Create grades table
        manager
            .create_table(
                Table::create()
                    .table(Grades::Table)
                    .if_not_exists()
                    .col(pk_auto(Grades::Id))
                    .col(integer(Grades::StudentId))
                    .col(integer(Grades::CourseId))
                    .col(string_null(Grades::LetterGrade))
                    .col(string_null(Grades::Semester))
                    .col(string_null(Grades::AcademicYear))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_grade_student")
                            .from(Grades::Table, Grades::StudentId)
                            .to(Students::Table, Students::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_grade_course")
                            .from(Grades::Table, Grades::CourseId)
                            .to(Courses::Table, Courses::Id),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop in reverse dependency order
        manager
            .drop_table(Table::drop().table(Grades::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Students::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Admins::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Admins {
    Table,
    Id,
    Username,
    PasswordHash,
}

#[derive(DeriveIden)]
enum Students {
    Table,
    Id,
    FirstName,
    LastName,
    Email,
    Phone,
    Address,
    DateOfBirth,
    EnrollmentDate,
}

#[derive(DeriveIden)]
enum Courses {
    Table,
    Id,
    CourseCode,
    CourseName,
    Credits,
    Description,
}

#[derive(DeriveIden)]
enum Grades {
    Table,
    Id,
    StudentId,
    CourseId,
    LetterGrade,
    Semester,
    AcademicYear,
}
