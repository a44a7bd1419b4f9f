//! Built-in content shown on the public page whenever the store has no rows.

use uuid::Uuid;

use crate::entities::{project::{Project, ProjectCategory}, skill::Skill};

pub fn sample_projects() -> Vec<Project> {
    let project = |n: u128, title: &str, description: &str, stack: &[&str], category| Project {
        id: Uuid::from_u128(n),
        title: title.to_string(),
        description: description.to_string(),
        image_url: None,
        tech_stack: stack.iter().map(|s| s.to_string()).collect(),
        demo_url: Some("#".to_string()),
        github_url: Some("#".to_string()),
        category,
        featured: true,
        order_index: n as i32,
        created_at: None,
    };

    vec![
        project(
            1,
            "Prediksi Harga Mobil",
            "Proyek Skripsi: Sistem prediksi harga mobil bekas menggunakan Machine Learning dengan framework Django. \
             Mengimplementasikan algoritma regression untuk memberikan estimasi harga yang akurat berdasarkan berbagai parameter kendaraan.",
            &["Django", "Python", "Machine Learning", "Scikit-learn", "Pandas"],
            ProjectCategory::DataScience,
        ),
        project(
            2,
            "Sistem Monitoring Pajak",
            "Proyek Kerja Praktik: Merancang dan mendesain sistem monitoring pembayaran pajak yang user-friendly. \
             Fokus pada UX/UI design untuk memudahkan tracking status pajak dan notifikasi pembayaran.",
            &["Figma", "UI/UX Design", "Prototyping", "User Research"],
            ProjectCategory::Web,
        ),
        project(
            3,
            "Unity Card Game",
            "Proyek Game Jam: Card game strategy yang dikembangkan menggunakan Unity Engine. \
             Menampilkan gameplay mechanics yang engaging dengan visual effects dan sound design yang immersive.",
            &["Unity", "C#", "Game Design", "Animation"],
            ProjectCategory::Game,
        ),
    ]
}

pub fn sample_skills() -> Vec<Skill> {
    const SKILLS: [(&str, &str, i32); 15] = [
        ("Programming Languages", "Python", 90),
        ("Programming Languages", "PHP", 90),
        ("Programming Languages", "C#", 80),
        ("Programming Languages", "TypeScript", 78),
        ("Web Development", "Django", 90),
        ("Web Development", "HTML/CSS", 95),
        ("Web Development", "Laravel", 90),
        ("Web Development", "Next.js", 75),
        ("Game Development", "Unity", 80),
        ("Game Development", "Mechanical programming", 80),
        ("Database", "MySQL", 90),
        ("Database", "Firebase", 80),
        ("Database", "Supabase", 75),
        ("Machine Learning", "Scikit-learn", 80),
        ("Machine Learning", "Data Scientist", 85),
    ];

    SKILLS
        .iter()
        .enumerate()
        .map(|(i, (category, name, level))| Skill {
            id: Uuid::from_u128(1000 + i as u128),
            name: name.to_string(),
            category: category.to_string(),
            level: *level,
            icon: None,
            created_at: None,
        })
        .collect()
}

/// The fetched list, or the samples when it is empty.
pub fn or_samples<T>(fetched: Vec<T>, samples: fn() -> Vec<T>) -> Vec<T> {
    if fetched.is_empty() { samples() } else { fetched }
}
