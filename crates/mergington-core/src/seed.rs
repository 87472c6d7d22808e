//! Seed catalog loaded into the directory at startup.
//!
//! Nine activities across academic, sports, arts, and intellectual clubs,
//! each starting with two signed-up students.

use mergington_types::{Activity, ActivityCatalog};

/// Helper to build an [`Activity`] with its initial participants.
fn activity(description: &str, schedule: &str, max: u32, participants: &[&str]) -> Activity {
    let mut activity = Activity::new(description, schedule, max);
    activity.participants = participants.iter().map(|p| (*p).to_owned()).collect();
    activity
}

/// Build the seed catalog.
pub fn seed_activities() -> ActivityCatalog {
    let entries = [
        (
            "Clube de Xadrez",
            activity(
                "Aprenda estratégias e participe de torneios de xadrez",
                "Sextas, 15h30 - 17h",
                12,
                &["michael@mergington.edu", "daniel@mergington.edu"],
            ),
        ),
        (
            "Aula de Programação",
            activity(
                "Aprenda fundamentos de programação e desenvolva projetos de software",
                "Terças e quintas, 15h30 - 16h30",
                20,
                &["emma@mergington.edu", "sophia@mergington.edu"],
            ),
        ),
        (
            "Educação Física",
            activity(
                "Educação física e atividades esportivas",
                "Segundas, quartas e sextas, 14h - 15h",
                30,
                &["john@mergington.edu", "olivia@mergington.edu"],
            ),
        ),
        // Sports
        (
            "Futebol",
            activity(
                "Participe do time de futebol da escola e jogue campeonatos",
                "Terças e quintas, 16h - 17h30",
                22,
                &["lucas@mergington.edu", "marcos@mergington.edu"],
            ),
        ),
        (
            "Vôlei",
            activity(
                "Aulas e treinos de vôlei para todos os níveis",
                "Quartas e sextas, 15h - 16h30",
                18,
                &["ana@mergington.edu", "carla@mergington.edu"],
            ),
        ),
        // Arts
        (
            "Teatro",
            activity(
                "Oficina de teatro e apresentações culturais",
                "Segundas e quartas, 16h - 17h30",
                15,
                &["paulo@mergington.edu", "juliana@mergington.edu"],
            ),
        ),
        (
            "Clube de Música",
            activity(
                "Aprenda instrumentos e participe da banda escolar",
                "Sextas, 14h - 15h30",
                12,
                &["rafael@mergington.edu", "lara@mergington.edu"],
            ),
        ),
        // Intellectual
        (
            "Clube de Leitura",
            activity(
                "Leitura e discussão de livros clássicos e contemporâneos",
                "Terças, 17h - 18h",
                16,
                &["camila@mergington.edu", "renato@mergington.edu"],
            ),
        ),
        (
            "Olimpíada de Matemática",
            activity(
                "Preparação para olimpíadas de matemática e desafios lógicos",
                "Quintas, 16h - 17h",
                20,
                &["bruno@mergington.edu", "aline@mergington.edu"],
            ),
        ),
    ];

    entries
        .into_iter()
        .map(|(name, activity)| (name.to_owned(), activity))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_nine_activities() {
        assert_eq!(seed_activities().len(), 9);
    }

    #[test]
    fn every_activity_starts_with_two_unique_participants() {
        for (name, activity) in seed_activities() {
            assert_eq!(activity.participants.len(), 2, "{name}");
            assert_ne!(activity.participants.first(), activity.participants.last());
            assert!(activity.max_participants > 0, "{name}");
        }
    }

    #[test]
    fn catalog_keeps_seed_order() {
        let names: Vec<String> = seed_activities().into_keys().collect();
        assert_eq!(
            names,
            vec![
                "Clube de Xadrez",
                "Aula de Programação",
                "Educação Física",
                "Futebol",
                "Vôlei",
                "Teatro",
                "Clube de Música",
                "Clube de Leitura",
                "Olimpíada de Matemática",
            ]
        );
    }

    #[test]
    fn futebol_is_seeded() {
        let catalog = seed_activities();
        let futebol = catalog.get("Futebol");
        assert_eq!(futebol.map(|a| a.max_participants), Some(22));
        assert_eq!(
            futebol.map(|a| a.participants.clone()),
            Some(vec![
                "lucas@mergington.edu".to_owned(),
                "marcos@mergington.edu".to_owned()
            ])
        );
    }
}
