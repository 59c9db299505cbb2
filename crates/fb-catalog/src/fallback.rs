use crate::movie::MovieRecord;
use fb_api_types::MovieId;

/// Static catalog shown when the backend returns no movies.
pub fn fallback_catalog() -> Vec<MovieRecord> {
    vec![
        MovieRecord {
            id: MovieId::from("blade"),
            title: "Бегущий по лезвию 2049".into(),
            genre: "Научная фантастика / Триллер".into(),
            price: 1190,
            year: Some(2017),
            rating: Some(8.0),
            poster: "https://images.unsplash.com/photo-1523798724326-d0c5df28c235?auto=format&fit=crop&w=600&q=80".into(),
            summary: "Инспектор К раскрывает тайну, способную обрушить остатки цивилизованного мира.".into(),
            backdrop: None,
        },
        MovieRecord {
            id: MovieId::from("dune"),
            title: "Дюна".into(),
            genre: "Научная фантастика / Драма".into(),
            price: 1290,
            year: Some(2021),
            rating: Some(8.1),
            poster: "https://images.unsplash.com/photo-1542204615-9dd4b3c4e353?auto=format&fit=crop&w=600&q=80".into(),
            summary: "Пол Атрейдес возглавляет воинов пустыни, чтобы освободить свой народ от гнёта Императора.".into(),
            backdrop: None,
        },
        MovieRecord {
            id: MovieId::from("matrix"),
            title: "Матрица".into(),
            genre: "Научная фантастика / Экшен".into(),
            price: 990,
            year: Some(1999),
            rating: Some(8.7),
            poster: "https://images.unsplash.com/photo-1509347528160-9a9e33742cdb?auto=format&fit=crop&w=600&q=80".into(),
            summary: "Хакер узнаёт правду о реальности и вступает в войну против её создателей.".into(),
            backdrop: None,
        },
    ]
}
