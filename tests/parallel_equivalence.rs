// tests/parallel_equivalence.rs
//
// The scorers are pure functions of their inputs with no shared state, so
// the parallel dispatch path is a performance choice only: for any input it
// must produce exactly the same result as the sequential path.

use legal_reliability_analyzer::{ReliabilityService, SearchResult};

fn corpus() -> Vec<(Vec<SearchResult>, String)> {
    let rich = vec![
        SearchResult::new(
            "4857 sayılı İş Kanunu madde 5 uyarınca işveren eşit davranma ilkesine uymakla yükümlüdür.",
            "doc-1",
        )
        .with_similarity(0.92)
        .with_publish_date("2024-01-02"),
        SearchResult::new(
            "Madde 18 feshin geçerli sebebe dayandırılmasını düzenlemektedir.",
            "doc-2",
        )
        .with_similarity(0.81)
        .with_title("İş Kanunu Şerhi 2022"),
        SearchResult::new(
            "Aykırılık halinde işçi tazminat talep edebilir.",
            "doc-3",
        ),
    ];

    vec![
        (vec![], String::new()),
        (vec![], "Bu konuda bilgi bulunmamaktadır.".to_string()),
        (
            rich.clone(),
            "4857 sayılı İş Kanunu madde 5 uyarınca işveren eşit davranma ilkesine uymakla \
             yükümlüdür. Ancak madde 18 kapsamında feshin geçerli sebebe dayandırılması gerekir."
                .to_string(),
        ),
        (
            rich,
            "Bu düzenleme mülga olup yürürlükten kaldırılmıştır.".to_string(),
        ),
    ]
}

#[tokio::test]
async fn parallel_and_sequential_agree_exactly() {
    let service = ReliabilityService::new();

    for (results, answer) in corpus() {
        let parallel = service
            .calculate_comprehensive_confidence(&results, &answer, true)
            .await;
        let sequential = service
            .calculate_comprehensive_confidence(&results, &answer, false)
            .await;

        // Full structural equality: overall, every criterion score and
        // every detail string.
        assert_eq!(parallel, sequential, "paths diverged for answer: {answer:?}");
    }
}

#[tokio::test]
async fn repeated_calls_are_deterministic() {
    let service = ReliabilityService::new();
    let (results, answer) = corpus().remove(2);

    let first = service
        .calculate_comprehensive_confidence(&results, &answer, true)
        .await;
    for _ in 0..5 {
        let again = service
            .calculate_comprehensive_confidence(&results, &answer, true)
            .await;
        assert_eq!(first, again);
    }
}
