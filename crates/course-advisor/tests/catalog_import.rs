use std::io::Write;

use course_advisor::recommendations::{
    recommend, BudgetTier, CatalogError, CourseCatalog, EducationLevel, ExperienceLevel,
    TimeAvailability, UserProfile,
};

const CATALOG_CSV: &str = "id,title,description,duration,level,price,category,tags,icon\n\
rust-1,Rust desde Cero,Ownership y borrowing,3 meses,Principiante,$450,Programación,Rust|Systems| ,🦀\n\
go-2,Go para Backends,Servicios concurrentes,5 meses,Intermedio,\"$1,100\",Programación,go|backend,🐹\n\
sec-3,Pentesting,Auditorías ofensivas,8 meses,advanced,$2000,Seguridad,ciberseguridad|cyber,🛡️\n";

fn student() -> UserProfile {
    UserProfile {
        name: "Iris".to_string(),
        age: 19,
        education: EducationLevel::Secondary,
        experience: ExperienceLevel::Beginner,
        interests: vec!["Rust".to_string(), "Tecnología".to_string()],
        goals: "conseguir trabajo".to_string(),
        time_available: TimeAvailability::Little,
        budget: BudgetTier::Low,
    }
}

#[test]
fn csv_rows_become_courses_in_file_order() {
    let catalog =
        CourseCatalog::from_reader(CATALOG_CSV.as_bytes(), "academy-2025").expect("imports");

    assert_eq!(catalog.version(), "academy-2025");
    assert_eq!(catalog.len(), 3);

    let rust = &catalog.courses()[0];
    assert_eq!(rust.id.0, "rust-1");
    assert_eq!(rust.level, ExperienceLevel::Beginner);
    assert_eq!(rust.tags, vec!["rust", "systems"]);
    assert_eq!(rust.price_amount(), Some(450));

    let go = &catalog.courses()[1];
    assert_eq!(go.price, "$1,100");
    assert_eq!(go.price_amount(), Some(1100));
    assert_eq!(catalog.courses()[2].level, ExperienceLevel::Advanced);
}

#[test]
fn imported_catalog_drives_ranking() {
    let catalog = CourseCatalog::from_reader(CATALOG_CSV.as_bytes(), "academy").expect("imports");
    let courses = recommend(&student(), &catalog);

    // level 3 + "rust" tag 2 + trabajo/Programación 2 + "3 meses" 1 + $450 2
    assert_eq!(courses[0].id.0, "rust-1");
    assert_eq!(courses.len(), 3);
}

#[test]
fn catalog_version_defaults_to_the_file_stem() {
    let dir = std::env::temp_dir().join(format!("course-advisor-{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("temp dir");
    let path = dir.join("spring-intake.csv");
    let mut file = std::fs::File::create(&path).expect("create csv");
    file.write_all(CATALOG_CSV.as_bytes()).expect("write csv");

    let catalog = CourseCatalog::from_path(&path).expect("loads from disk");
    assert_eq!(catalog.version(), "spring-intake");
    assert_eq!(catalog.len(), 3);

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn missing_file_is_an_io_error() {
    let err = CourseCatalog::from_path("/definitely/not/here/catalog.csv").expect_err("missing");
    assert!(matches!(err, CatalogError::Io(_)));
}

#[test]
fn unknown_level_is_rejected() {
    let csv = "id,title,description,duration,level,price,category,tags,icon\n\
x,Curso,desc,3 meses,Experto,$100,Programación,web,💡\n";
    let err = CourseCatalog::from_reader(csv.as_bytes(), "bad").expect_err("rejected");
    assert!(matches!(
        err,
        CatalogError::UnknownLevel { ref id, ref level } if id == "x" && level == "Experto"
    ));
}

#[test]
fn unreadable_price_is_rejected() {
    let csv = "id,title,description,duration,level,price,category,tags,icon\n\
x,Curso,desc,3 meses,Principiante,gratis,Programación,web,💡\n";
    let err = CourseCatalog::from_reader(csv.as_bytes(), "bad").expect_err("rejected");
    assert!(matches!(err, CatalogError::InvalidPrice { .. }));
}

#[test]
fn duplicate_ids_are_rejected() {
    let csv = "id,title,description,duration,level,price,category,tags,icon\n\
x,Uno,desc,3 meses,Principiante,$100,Programación,web,💡\n\
x,Dos,desc,5 meses,Intermedio,$200,Diseño,ux,🎨\n";
    let err = CourseCatalog::from_reader(csv.as_bytes(), "bad").expect_err("rejected");
    assert!(matches!(err, CatalogError::DuplicateId(ref id) if id == "x"));
}

#[test]
fn missing_columns_are_a_csv_error() {
    let csv = "id,title\nx,Curso\n";
    let err = CourseCatalog::from_reader(csv.as_bytes(), "bad").expect_err("rejected");
    assert!(matches!(err, CatalogError::Csv(_)));
}
