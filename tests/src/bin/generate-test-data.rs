use std::path::PathBuf;

use anyhow::Context;
use chrono::Duration;
use rand::{rngs::StdRng, Rng, SeedableRng};
use remark_api::{Comment, CommentId, Time, User, UserImage};
use remark_client::{CommentStore, DataDump, MemoryStorage, DEFAULT_STORAGE_KEY};

const USERNAMES: [&str; 4] = ["amyrobson", "maxblagun", "ramsesmiron", "juliusomo"];
const CURRENT_USER: &str = "juliusomo";

const COMMENT_WORDS_MIN: usize = 5;
const COMMENT_WORDS_MAX: usize = 60;
const MAX_MINUTES_BETWEEN_COMMENTS: i64 = 3 * 24 * 60;

#[derive(structopt::StructOpt)]
struct Opt {
    /// Number of comments to generate
    #[structopt(short, long, default_value = "50")]
    comments: usize,

    /// Probability for each comment to reply to an earlier one
    #[structopt(short, long, default_value = "0.6")]
    reply_probability: f64,

    /// Seed of the random generator, picked at random if unset
    #[structopt(short, long)]
    seed: Option<u64>,

    /// Write the state to this file instead of stdout
    #[structopt(short, long)]
    output: Option<PathBuf>,
}

fn gen_user(name: &str) -> User {
    User {
        username: String::from(name),
        image: UserImage {
            png: format!("./images/avatars/image-{name}.png"),
            webp: format!("./images/avatars/image-{name}.webp"),
        },
    }
}

fn gen_comments(rng: &mut StdRng, count: usize, reply_probability: f64) -> Vec<Comment> {
    let mut date: Time = "2023-01-01T00:00:00Z"
        .parse()
        .expect("parsing hardcoded start date");
    let mut comments: Vec<Comment> = Vec::with_capacity(count);
    for _ in 0..count {
        // dates only go forward, so replies are always younger than their parent
        date = date + Duration::minutes(rng.gen_range(1..=MAX_MINUTES_BETWEEN_COMMENTS));
        let replying_to = match !comments.is_empty() && rng.gen_bool(reply_probability) {
            true => Some(comments[rng.gen_range(0..comments.len())].id.clone()),
            false => None,
        };
        let words = rng.gen_range(COMMENT_WORDS_MIN..=COMMENT_WORDS_MAX);
        comments.push(Comment {
            id: CommentId(uuid::Builder::from_random_bytes(rng.gen()).into_uuid().to_string()),
            content: lipsum::lipsum_words_from_seed(words, rng.gen()),
            created_at: date,
            score: rng.gen_range(-3..20),
            user: gen_user(USERNAMES[rng.gen_range(0..USERNAMES.len())]),
            replying_to,
        });
    }
    comments
}

fn main() -> anyhow::Result<()> {
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt().with_writer(std::io::stderr).init();
    }
    let opt = <Opt as structopt::StructOpt>::from_args();
    anyhow::ensure!(
        (0.0..=1.0).contains(&opt.reply_probability),
        "reply probability must be between 0 and 1, got {}",
        opt.reply_probability
    );

    let seed = opt.seed.unwrap_or_else(rand::random);
    tracing::info!(seed, comments = opt.comments, "generating test data");
    let mut rng = StdRng::seed_from_u64(seed);

    let db = DataDump {
        current_user: gen_user(CURRENT_USER),
        comments: gen_comments(&mut rng, opt.comments, opt.reply_probability),
    };
    let json = serde_json::to_string_pretty(&db).context("serializing generated state")?;

    // make sure the comment store accepts what we generated instead of falling back to its seed
    let store = CommentStore::initialize(MemoryStorage::with(DEFAULT_STORAGE_KEY, &json));
    anyhow::ensure!(
        *store.dump() == db,
        "comment store did not load the generated state"
    );

    match &opt.output {
        Some(path) => std::fs::write(path, json)
            .with_context(|| format!("writing generated state to {path:?}"))?,
        None => println!("{json}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn same_seed_gives_same_comments() {
        let a = gen_comments(&mut StdRng::seed_from_u64(1), 20, 0.9);
        let b = gen_comments(&mut StdRng::seed_from_u64(1), 20, 0.9);
        assert_eq!(a, b);
        assert_ne!(a, gen_comments(&mut StdRng::seed_from_u64(2), 20, 0.9));
    }

    #[test]
    fn replies_point_to_older_comments() {
        let comments = gen_comments(&mut StdRng::seed_from_u64(7), 50, 0.9);
        let dates = comments
            .iter()
            .map(|c| (&c.id, c.created_at))
            .collect::<HashMap<_, _>>();
        assert_eq!(dates.len(), comments.len(), "duplicate comment ids");
        assert!(comments.iter().any(|c| c.replying_to.is_some()));
        for (i, c) in comments.iter().enumerate() {
            assert!(!c.content.trim().is_empty());
            if let Some(parent) = &c.replying_to {
                let parent_pos = comments
                    .iter()
                    .position(|p| p.id == *parent)
                    .expect("reply to a comment that was not generated");
                assert!(parent_pos < i);
                assert!(dates[parent] < c.created_at);
            }
        }
    }

    #[test]
    fn no_replies_without_reply_probability() {
        let comments = gen_comments(&mut StdRng::seed_from_u64(3), 30, 0.0);
        assert!(comments.iter().all(|c| c.is_root()));
    }
}
