use super::super::domain::{FicoRange, LenderDefinition, LenderId, LenderProgram};

struct ProgramSeed {
    name: &'static str,
    tier: &'static str,
    fico: (u16, u16),
    max_ltv: f64,
    max_term: u32,
}

impl ProgramSeed {
    fn build(&self) -> LenderProgram {
        LenderProgram {
            name: self.name.to_string(),
            tier: Some(self.tier.to_string()),
            fico_range: Some(FicoRange {
                min: self.fico.0,
                max: self.fico.1,
            }),
            max_ltv: Some(self.max_ltv),
            max_term: Some(self.max_term),
            is_active: true,
        }
    }
}

pub(super) fn reference_lenders() -> Vec<LenderDefinition> {
    vec![
        LenderDefinition {
            id: LenderId("1".to_string()),
            name: "None (subprime to superprime tiers)".to_string(),
            lender_type: "Traditional Bank".to_string(),
            is_active: true,
            min_credit_score: Some(500),
            max_credit_score: Some(850),
            min_income: Some(25_000.0),
            min_loan_amount: Some(5_000.0),
            max_loan_amount: Some(100_000.0),
            min_term: Some(36),
            max_term: Some(84),
            max_ltv: Some(120.0),
            max_pti: Some(20.0),
            max_vehicle_age: Some(10),
            max_mileage: Some(150_000),
            acquisition_fee: Some(0.0),
            base_rate: Some(8.0),
            programs: vec![ProgramSeed {
                name: "Standard Program",
                tier: "All Tiers",
                fico: (500, 850),
                max_ltv: 120.0,
                max_term: 84,
            }
            .build()],
        },
        LenderDefinition {
            id: LenderId("2".to_string()),
            name: "Tier 0-9 ($300-$850)".to_string(),
            lender_type: "Tier-Based Lender".to_string(),
            is_active: true,
            min_credit_score: Some(550),
            max_credit_score: Some(800),
            min_income: Some(30_000.0),
            min_loan_amount: Some(8_000.0),
            max_loan_amount: Some(75_000.0),
            min_term: Some(48),
            max_term: Some(72),
            max_ltv: Some(110.0),
            max_pti: Some(18.0),
            max_vehicle_age: Some(8),
            max_mileage: Some(120_000),
            acquisition_fee: Some(620.0),
            base_rate: Some(9.5),
            programs: [
                ProgramSeed {
                    name: "Tier 0-3 Prime",
                    tier: "Tier 0-3",
                    fico: (700, 800),
                    max_ltv: 110.0,
                    max_term: 72,
                },
                ProgramSeed {
                    name: "Tier 4-6 Near Prime",
                    tier: "Tier 4-6",
                    fico: (650, 699),
                    max_ltv: 105.0,
                    max_term: 66,
                },
                ProgramSeed {
                    name: "Tier 7-9 Subprime",
                    tier: "Tier 7-9",
                    fico: (550, 649),
                    max_ltv: 100.0,
                    max_term: 60,
                },
            ]
            .iter()
            .map(ProgramSeed::build)
            .collect(),
        },
        LenderDefinition {
            id: LenderId("3".to_string()),
            name: "Subprime to near-prime".to_string(),
            lender_type: "Subprime Specialist".to_string(),
            is_active: true,
            min_credit_score: Some(500),
            max_credit_score: Some(699),
            min_income: Some(20_000.0),
            min_loan_amount: Some(5_000.0),
            max_loan_amount: Some(40_000.0),
            min_term: Some(36),
            max_term: Some(72),
            max_ltv: Some(110.0),
            max_pti: Some(25.0),
            max_vehicle_age: Some(12),
            max_mileage: Some(180_000),
            acquisition_fee: Some(588.0),
            base_rate: Some(12.5),
            programs: [
                ProgramSeed {
                    name: "Subprime Program",
                    tier: "Subprime",
                    fico: (500, 649),
                    max_ltv: 110.0,
                    max_term: 72,
                },
                ProgramSeed {
                    name: "Near Prime Program",
                    tier: "Near Prime",
                    fico: (650, 699),
                    max_ltv: 105.0,
                    max_term: 66,
                },
            ]
            .iter()
            .map(ProgramSeed::build)
            .collect(),
        },
        LenderDefinition {
            id: LenderId("4".to_string()),
            name: "Deep subprime focus".to_string(),
            lender_type: "Deep Subprime".to_string(),
            is_active: true,
            min_credit_score: Some(300),
            max_credit_score: Some(599),
            min_income: Some(15_000.0),
            min_loan_amount: Some(3_000.0),
            max_loan_amount: Some(25_000.0),
            min_term: Some(24),
            max_term: Some(60),
            max_ltv: Some(100.0),
            max_pti: Some(30.0),
            max_vehicle_age: Some(15),
            max_mileage: Some(200_000),
            acquisition_fee: Some(750.0),
            base_rate: Some(18.5),
            programs: vec![ProgramSeed {
                name: "Deep Subprime",
                tier: "Deep Subprime",
                fico: (300, 599),
                max_ltv: 100.0,
                max_term: 60,
            }
            .build()],
        },
        LenderDefinition {
            id: LenderId("5".to_string()),
            name: "Prime/credit union guidelines".to_string(),
            lender_type: "Credit Union".to_string(),
            is_active: true,
            min_credit_score: Some(680),
            max_credit_score: Some(850),
            min_income: Some(40_000.0),
            min_loan_amount: Some(10_000.0),
            max_loan_amount: Some(80_000.0),
            min_term: Some(36),
            max_term: Some(72),
            max_ltv: Some(115.0),
            max_pti: Some(15.0),
            max_vehicle_age: Some(6),
            max_mileage: Some(100_000),
            acquisition_fee: Some(0.0),
            base_rate: Some(5.5),
            programs: vec![ProgramSeed {
                name: "Prime Member Program",
                tier: "Prime",
                fico: (680, 850),
                max_ltv: 115.0,
                max_term: 72,
            }
            .build()],
        },
    ]
}
