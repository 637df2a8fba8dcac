//! Property tests for the pipeline invariants.

use data_loader::{Dataset, Movie, MovieId, Rating};
use pipeline::{aggregate_ratings, expand_genres, join_movies, JoinedRow, MovieStats, QueryConfig, TopGenre};
use proptest::prelude::*;
use std::collections::{HashMap, HashSet};

fn ratings_strategy() -> impl Strategy<Value = Vec<Rating>> {
    prop::collection::vec((0u32..50, 0u32..20, 0.0f64..5.0), 0..300).prop_map(|rows| {
        rows.into_iter()
            .map(|(user_id, movie_id, rating)| Rating {
                user_id,
                movie_id,
                rating,
                timestamp: None,
            })
            .collect()
    })
}

fn movies_strategy() -> impl Strategy<Value = Vec<Movie>> {
    prop::collection::vec((0u32..25, "[A-C|]{0,8}"), 0..30).prop_map(|rows| {
        rows.into_iter()
            .map(|(id, genres)| Movie {
                id,
                title: format!("Movie {}", id),
                genres,
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn aggregate_counts_and_means_match(ratings in ratings_strategy()) {
        let mut expected: HashMap<MovieId, (u32, f64)> = HashMap::new();
        for r in &ratings {
            let entry = expected.entry(r.movie_id).or_insert((0, 0.0));
            entry.0 += 1;
            entry.1 += r.rating;
        }

        let stats = aggregate_ratings(ratings);
        prop_assert_eq!(stats.len(), expected.len());
        for MovieStats { movie_id, rating_count, avg_rating } in stats {
            let (count, sum) = expected[&movie_id];
            let mean = sum / count as f64;
            prop_assert_eq!(rating_count, count);
            prop_assert!((avg_rating - mean).abs() <= 1e-9 * mean.abs().max(1.0));
        }
    }

    #[test]
    fn join_keeps_exactly_the_shared_ids(ratings in ratings_strategy(), movies in movies_strategy()) {
        let rated: HashSet<MovieId> = ratings.iter().map(|r| r.movie_id).collect();
        let known: HashSet<MovieId> = movies.iter().map(|m| m.id).collect();

        let rows = join_movies(aggregate_ratings(ratings), movies);
        let ids: Vec<MovieId> = rows.iter().map(|r| r.movie_id).collect();
        let unique: HashSet<MovieId> = ids.iter().copied().collect();

        prop_assert_eq!(ids.len(), unique.len());
        prop_assert_eq!(unique, rated.intersection(&known).copied().collect::<HashSet<_>>());
    }

    #[test]
    fn expansion_emits_one_row_per_genre_token(genres in prop::collection::vec("[A-C|]{0,8}", 0..20)) {
        let rows: Vec<JoinedRow> = genres
            .iter()
            .enumerate()
            .map(|(i, g)| JoinedRow {
                movie_id: i as MovieId,
                title: format!("Movie {}", i),
                genres: g.clone(),
                rating_count: 1,
                avg_rating: 1.0,
            })
            .collect();

        let expanded = expand_genres(rows);
        for (i, g) in genres.iter().enumerate() {
            let tokens = g.split('|').filter(|t| !t.is_empty()).count();
            let emitted = expanded.iter().filter(|r| r.movie_id == i as MovieId).count();
            prop_assert_eq!(emitted, tokens);
        }
    }

    #[test]
    fn report_is_sorted_monotone_and_repeatable(
        ratings in ratings_strategy(),
        movies in movies_strategy(),
        low in 0u32..10,
        extra in 0u32..10,
    ) {
        let dataset = Dataset::new(ratings, movies);
        let run = |min_ratings: u32| {
            TopGenre::new(QueryConfig::new("A").with_min_ratings(min_ratings))
                .unwrap()
                .run(dataset.clone())
                .unwrap()
        };

        let results = run(low);
        for pair in results.windows(2) {
            prop_assert!(pair[0].avg_rating >= pair[1].avg_rating);
        }
        prop_assert!(results.iter().all(|r| r.rating_count > low));

        prop_assert!(run(low + extra).len() <= results.len());
        prop_assert_eq!(run(low), results);
    }
}
