//! Embedded sample data. Shapes match the proxied resources exactly, so
//! consumers cannot tell a fixture-backed response from a relayed one.

use time::macros::datetime;

use super::dto::{
    Badge, BadgeStatus, FoodNutrients, HealthProfile, IntakeSnapshot, NutrientTotals,
    RecommendedFood,
};

pub fn health_profile() -> HealthProfile {
    HealthProfile {
        goal: "체중 감량".into(),
        diseases: vec!["고혈압".into()],
        recommended_calories: 1800.0,
        activity_level: "보통".into(),
    }
}

pub fn intake_snapshot() -> IntakeSnapshot {
    IntakeSnapshot {
        total_calories: 1450.0,
        target_calories: 1800.0,
        nutrients: NutrientTotals {
            sodium: 1750.0,
            carbs: 182.0,
            protein: 76.0,
            fat: 48.0,
            sugar: 34.0,
        },
    }
}

pub fn recommendations() -> Vec<RecommendedFood> {
    vec![
        RecommendedFood {
            id: 1,
            name: "닭가슴살 샐러드".into(),
            description: "저염 드레싱을 곁들인 고단백 샐러드".into(),
            calories: Some(320.0),
            nutrients: Some(FoodNutrients {
                protein: 32.0,
                carbs: 18.0,
                fat: 12.0,
                sodium: 350.0,
            }),
        },
        RecommendedFood {
            id: 2,
            name: "연어 스테이크와 현미밥".into(),
            description: "오메가3가 풍부한 구운 연어 한 상".into(),
            calories: Some(450.0),
            nutrients: Some(FoodNutrients {
                protein: 35.0,
                carbs: 42.0,
                fat: 16.0,
                sodium: 420.0,
            }),
        },
        RecommendedFood {
            id: 3,
            name: "두부 야채 볶음".into(),
            description: "나트륨을 줄인 식물성 단백질 한 끼".into(),
            calories: Some(380.0),
            nutrients: Some(FoodNutrients {
                protein: 24.0,
                carbs: 30.0,
                fat: 14.0,
                sodium: 300.0,
            }),
        },
    ]
}

pub fn badges() -> Vec<Badge> {
    vec![
        Badge {
            id: "week-streak".into(),
            title: "7일 연속 기록".into(),
            subtitle: "일주일 연속으로 식사를 기록해요".into(),
            icon: "/badges/week-streak.svg".into(),
            status: BadgeStatus::Pending,
            achieved_at: None,
        },
        Badge {
            id: "first-log".into(),
            title: "첫 기록".into(),
            subtitle: "첫 식사를 기록했어요".into(),
            icon: "/badges/first-log.svg".into(),
            status: BadgeStatus::Achieved,
            achieved_at: Some(datetime!(2025-11-02 09:30 UTC)),
        },
        Badge {
            id: "sodium-master".into(),
            title: "저염 마스터".into(),
            subtitle: "한 달간 나트륨 목표를 지켜요".into(),
            icon: "/badges/sodium-master.svg".into(),
            status: BadgeStatus::Locked,
            achieved_at: None,
        },
        Badge {
            id: "goal-reached".into(),
            title: "목표 달성".into(),
            subtitle: "권장 칼로리 목표를 지켰어요".into(),
            icon: "/badges/goal-reached.svg".into(),
            status: BadgeStatus::Achieved,
            achieved_at: Some(datetime!(2025-11-20 21:05 UTC)),
        },
    ]
}
