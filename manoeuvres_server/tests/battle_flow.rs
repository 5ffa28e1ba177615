
use std::process::Command;

use manoeuvres_app::{
    cqrs::queries::{
        GetAvailableOrders, GetFortificationOptions, GetFortificationRitualOptions,
        GetFortificationStrength, GetRitualOptions, ResolveBattle,
    },
    queries_handlers::{
        GetAvailableOrdersHandler, GetFortificationOptionsHandler,
        GetFortificationRitualOptionsHandler, GetFortificationStrengthHandler,
        GetRitualOptionsHandler, ResolveBattleHandler,
    },
};
use manoeuvres_types::{
    battle::{Outcome, UnitKind},
    common::{ForceId, FortificationId, Side},
    reports::BattleReport,
};

use test_utils::{bundled_app, data_path, sample_submission};

#[tokio::test]
async fn test_sample_battle_is_an_imperial_victory() {
    let app = bundled_app();
    let report = app
        .query(
            ResolveBattle {
                submission: sample_submission(),
            },
            ResolveBattleHandler::new(),
        )
        .await
        .unwrap();
    let result = report.result;

    assert_eq!(result.imperial.casualties_inflicted, 1050);
    assert_eq!(result.imperial.total_contribution, 11850);
    assert_eq!(result.barbarian.casualties_inflicted, 875);
    assert_eq!(result.barbarian.total_contribution, 11300);

    // A 550 margin is worth no points, and the Strategic Defence bonus
    // cannot add any on top of it.
    assert_eq!(result.outcome, Outcome::ImperialVictory);
    assert_eq!(result.total_victory_points, 0);
    assert_eq!(result.offensive_victory_points, 0);
    assert_eq!(result.defensive_victory_points, 0);

    // 875 shared by the two forces that were not sent home
    let golden_sun = result.casualties_for(Side::Imperial, UnitKind::Force, 0).unwrap();
    assert_eq!(golden_sun.casualties_taken, 437);
    assert_eq!(golden_sun.remaining_strength, 4563);

    let citadel_guard = result.casualties_for(Side::Imperial, UnitKind::Force, 1).unwrap();
    assert_eq!(citadel_guard.remaining_strength, 2563);

    let sent_home = result.casualties_for(Side::Imperial, UnitKind::Force, 2).unwrap();
    assert_eq!(sent_home.casualties_taken, 0);
    assert_eq!(sent_home.remaining_strength, 2000);

    let horde = result.casualties_for(Side::Barbarian, UnitKind::Force, 0).unwrap();
    assert_eq!(horde.name, "Druj Horde");
    assert_eq!(horde.remaining_strength, 3475);

    let fort = result
        .casualties_for(Side::Barbarian, UnitKind::Fortification, 0)
        .unwrap();
    assert_eq!(fort.casualties_taken, 1050);
    assert_eq!(fort.remaining_strength, 0);
}

#[tokio::test]
async fn test_reference_data_queries() {
    let app = bundled_app();

    let orders = app
        .query(
            GetAvailableOrders { force_id: ForceId(8) },
            GetAvailableOrdersHandler::new(),
        )
        .await
        .unwrap();
    let ids: Vec<u32> = orders.iter().map(|o| o.id.0).collect();
    assert_eq!(ids, vec![1, 3, 4, 6, 21, 40, 2, 7, 8, 42]);

    let druj_orders = app
        .query(
            GetAvailableOrders { force_id: ForceId(30) },
            GetAvailableOrdersHandler::new(),
        )
        .await
        .unwrap();
    assert!(druj_orders.iter().all(|o| o.name != "Storm the Walls"));

    let rituals = app
        .query(GetRitualOptions { force_id: ForceId(7) }, GetRitualOptionsHandler::new())
        .await
        .unwrap();
    assert_eq!(rituals.len(), 1);
    assert_eq!(rituals[0].name, "Fair Winds");

    let forts = app
        .query(
            GetFortificationOptions { side: Side::Barbarian },
            GetFortificationOptionsHandler::new(),
        )
        .await
        .unwrap();
    let fort_ids: Vec<u32> = forts.iter().map(|f| f.id.0).collect();
    assert_eq!(fort_ids, vec![1, 2, 3]);

    let strength = app
        .query(
            GetFortificationStrength {
                fortification_id: FortificationId(8),
            },
            GetFortificationStrengthHandler::new(),
        )
        .await
        .unwrap();
    assert_eq!(strength, 6000);

    let fort_rituals = app
        .query(GetFortificationRitualOptions, GetFortificationRitualOptionsHandler::new())
        .await
        .unwrap();
    assert_eq!(fort_rituals.len(), 2);
}

#[test]
fn test_cli_prints_battle_report() {
    let output = Command::new(env!("CARGO_BIN_EXE_manoeuvres"))
        .arg(data_path("sample_battle.json"))
        .arg("--rules")
        .arg(data_path("rules.json"))
        .env("RUST_LOG", "warn")
        .output()
        .unwrap();

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let report: BattleReport = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report.result.outcome, Outcome::ImperialVictory);
    assert_eq!(report.result.casualties.len(), 6);
}
