use rand::thread_rng;
use skirm_core::prelude::*;
use skirm_flow::StartFlow;
use tracing::Level;

fn main() {
    setup_tracing();
    let flow = StartFlow::from_args();

    match flow {
        StartFlow::Inspect { name, path } => inspect(&name, &path),
        StartFlow::Sample {
            resist,
            power,
            rolls,
        } => sample(resist, power, rolls),
    }
}

fn setup_tracing() {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_writer(std::io::stderr)
        .with_max_level(Level::WARN)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber)
        .map_err(|_err| eprintln!("Unable to set global default subscriber"));
}

fn inspect(name: &str, path: &str) {
    let set = match TerrainObjectSet::load(name, path) {
        Ok(set) => set,
        Err(TerrainLoadError::ReadingFile { error, path }) => {
            eprintln!("can't read {}: {}", path, error);
            std::process::exit(1);
        }
        Err(TerrainLoadError::TruncatedRecord { name, length }) => {
            eprintln!(
                "{} is corrupt: {} bytes is not a whole number of records",
                name, length
            );
            std::process::exit(1);
        }
    };

    println!("{}: {} objects", set.name(), set.len());
    for (index, object) in set.iter().enumerate() {
        println!(
            "{:3} {:?} {:?} walk {} door {} wall {} block l/v/h {}/{}/{}",
            index,
            object.object_type(),
            object.special_type(),
            object.tu_cost(MovementType::Walk),
            object.is_door() || object.is_ufo_door(),
            object.is_big_wall(),
            object.block(BlockType::Light),
            object.block(BlockType::Vision),
            object.block(BlockType::He),
        );
    }
}

fn sample(resist: ResistType, power: i32, rolls: u32) {
    let rule = RuleDamageType {
        resist_type: resist,
        ..Default::default()
    };
    let settings = DamageSettings::default();
    let mut rng = thread_rng();

    let mut min = i32::MAX;
    let mut max = i32::MIN;
    let mut total: i64 = 0;
    for _ in 0..rolls {
        let roll = rule.random_damage(power, &mut rng, &settings);
        min = min.min(roll);
        max = max.max(roll);
        total += roll as i64;
    }
    println!(
        "{:?} power {}: {} rolls, min {} max {} mean {:.1}",
        resist,
        power,
        rolls,
        min,
        max,
        total as f64 / rolls as f64
    );
}
