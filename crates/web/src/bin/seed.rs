//! Seeds a demo event with divisions, weight classes, two clubs and a few
//! athletes with draft entries. Division assignment here uses the
//! OPEN-gender fallback, which the live entry-creation path deliberately
//! does not.

use anyhow::{Context, bail};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use storage::{
    Database,
    dto::athlete::CreateAthleteRequest,
    models::{Division, EntryStatus, EntryType, Gender, WeightClass},
    repository::{
        athlete::AthleteRepository,
        entry::{EntryRepository, NewEntry},
        event::EventRepository,
    },
    services::eligibility,
};
use uuid::Uuid;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();

    let database_url =
        std::env::var("DATABASE_URL").context("Cannot load DATABASE_URL env variable")?;
    let db = Database::new(&database_url).await?;
    db.run_migrations().await?;

    let pool = db.pool();

    let already_seeded =
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM events)")
            .fetch_one(pool)
            .await?;
    if already_seeded {
        tracing::info!("Events already present, nothing to do");
        return Ok(());
    }

    let event_id = sqlx::query_scalar::<_, Uuid>(
        r#"
        INSERT INTO events (name, start_date, registration_opens_at, registration_closes_at)
        VALUES ($1, $2, $3, $4)
        RETURNING event_id
        "#,
    )
    .bind("Autumn Open Karate Championship 2026")
    .bind(date(2026, 10, 17))
    .bind(date(2026, 6, 1))
    .bind(date(2026, 9, 30))
    .fetch_one(pool)
    .await?;
    tracing::info!(%event_id, "Created demo event");

    let division_rows: &[(&str, &str, i32, i32, Gender)] = &[
        ("cadet-m", "Cadet Male", 14, 15, Gender::Male),
        ("cadet-f", "Cadet Female", 14, 15, Gender::Female),
        ("junior-m", "Junior Male", 16, 17, Gender::Male),
        ("junior-f", "Junior Female", 16, 17, Gender::Female),
        ("senior-m", "Senior Male", 18, 39, Gender::Male),
        ("senior-f", "Senior Female", 18, 39, Gender::Female),
        ("veteran-open", "Veteran Open", 40, 99, Gender::Open),
    ];

    for (key, name, min_age, max_age, gender) in division_rows {
        sqlx::query(
            r#"
            INSERT INTO divisions (event_id, key, name, min_age, max_age, gender)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(event_id)
        .bind(key)
        .bind(name)
        .bind(min_age)
        .bind(max_age)
        .bind(gender)
        .execute(pool)
        .await?;
    }

    let events = EventRepository::new(pool);
    let divisions = events.divisions(event_id).await?;

    if let Err((a, b)) = eligibility::verify_no_overlap(&divisions) {
        bail!("Seed data invalid: divisions {a} and {b} overlap in age range");
    }
    tracing::info!(count = divisions.len(), "Created divisions");

    let division_id = |key: &str| -> Uuid {
        divisions
            .iter()
            .find(|d| d.key == key)
            .map(|d| d.division_id)
            .expect("seeded division")
    };

    let weight_rows: &[(&str, Gender, &str, Option<i32>, Option<i32>)] = &[
        ("senior-m", Gender::Male, "-67kg", None, Some(67)),
        ("senior-m", Gender::Male, "-84kg", Some(67), Some(84)),
        ("senior-m", Gender::Male, "+84kg", Some(84), None),
        ("senior-f", Gender::Female, "-61kg", None, Some(61)),
        ("senior-f", Gender::Female, "+61kg", Some(61), None),
    ];

    for (division_key, gender, name, min_kg, max_kg) in weight_rows {
        sqlx::query(
            r#"
            INSERT INTO weight_classes (event_id, division_id, gender, name, min_kg, max_kg)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(event_id)
        .bind(division_id(*division_key))
        .bind(gender)
        .bind(name)
        .bind(min_kg.map(Decimal::from))
        .bind(max_kg.map(Decimal::from))
        .execute(pool)
        .await?;
    }

    let weight_classes = events.weight_classes(event_id).await?;
    tracing::info!(count = weight_classes.len(), "Created weight classes");

    let mut club_ids = Vec::new();
    for (name, email) in [
        ("Shotokan Dojo Leipzig", "office@shotokan-leipzig.example"),
        ("Bushido Karate Club", "contact@bushido-kc.example"),
    ] {
        let club_id = sqlx::query_scalar::<_, Uuid>(
            "INSERT INTO clubs (name, contact_email) VALUES ($1, $2) RETURNING club_id",
        )
        .bind(name)
        .bind(email)
        .fetch_one(pool)
        .await?;
        club_ids.push(club_id);
    }

    sqlx::query(
        r#"
        INSERT INTO users (club_id, name, email, role)
        VALUES (NULL, 'Tournament Admin', 'admin@tournament.example', 'ADMIN'),
               ($1, 'Leipzig Manager', 'manager@shotokan-leipzig.example', 'CLUB_MANAGER'),
               ($2, 'Bushido Coach', 'coach@bushido-kc.example', 'COACH')
        "#,
    )
    .bind(club_ids[0])
    .bind(club_ids[1])
    .execute(pool)
    .await?;

    let athlete_rows: &[(usize, &str, &str, NaiveDate, Gender, i32)] = &[
        (0, "Aiko", "Tanaka", date(2011, 3, 14), Gender::Female, 48),
        (0, "Jonas", "Weber", date(2009, 11, 2), Gender::Male, 62),
        (0, "Heinz", "Vogel", date(1979, 5, 23), Gender::Male, 88),
        (1, "Mara", "Krause", date(2001, 7, 30), Gender::Female, 58),
        (1, "Tarik", "Demir", date(1998, 1, 19), Gender::Male, 79),
    ];

    let athletes = AthleteRepository::new(pool);
    let entries = EntryRepository::new(pool);
    let event = events.find_by_id(event_id).await?;

    for (club_index, first_name, last_name, dob, gender, weight) in athlete_rows {
        let athlete = athletes
            .create(&CreateAthleteRequest {
                club_id: club_ids[*club_index],
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
                dob: *dob,
                gender: *gender,
                weight_kg: Some(Decimal::from(*weight)),
                belt_rank: None,
                emergency_contact: None,
            })
            .await?;

        let age = eligibility::age_on(event.start_date, athlete.dob);
        let Some(division) =
            eligibility::match_division_with_open_fallback(&divisions, athlete.gender, age)
        else {
            tracing::warn!(
                athlete = %athlete.athlete_id,
                age,
                "No division matches, skipping entries"
            );
            continue;
        };

        entries
            .create(&NewEntry {
                event_id,
                club_id: athlete.club_id,
                entry_type: EntryType::Kata,
                division_id: division.division_id,
                athlete_id: Some(athlete.athlete_id),
                team_id: None,
                weight_class_id: None,
                status: EntryStatus::Draft,
                fee_cents: 2500,
            })
            .await?;

        if let Some(class) = kumite_class(&weight_classes, division, athlete.weight_kg) {
            entries
                .create(&NewEntry {
                    event_id,
                    club_id: athlete.club_id,
                    entry_type: EntryType::Kumite,
                    division_id: division.division_id,
                    athlete_id: Some(athlete.athlete_id),
                    team_id: None,
                    weight_class_id: Some(class.weight_class_id),
                    status: EntryStatus::Draft,
                    fee_cents: 2500,
                })
                .await?;
        }
    }

    tracing::info!("Seed completed");
    Ok(())
}

/// Weight class of the athlete's division whose (min, max] band contains
/// the athlete's weight.
fn kumite_class<'a>(
    classes: &'a [WeightClass],
    division: &Division,
    weight_kg: Option<Decimal>,
) -> Option<&'a WeightClass> {
    let weight = weight_kg?;
    classes.iter().find(|c| {
        c.division_id == division.division_id
            && c.gender == division.gender
            && c.min_kg.is_none_or(|min| weight > min)
            && c.max_kg.is_none_or(|max| weight <= max)
    })
}
