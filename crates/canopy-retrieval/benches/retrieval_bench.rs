use std::collections::HashMap;
use std::sync::Arc;

use criterion::{criterion_group, criterion_main, Criterion};

use canopy_core::models::{Node, OrderingPolicy, QueryBundle};
use canopy_core::traits::{IDocStore, IRetriever};
use canopy_docstore::InMemoryDocStore;
use canopy_retrieval::{sorted_node_list, TreeRootRetriever};
use canopy_tree::{TreeIndex, TreeIndexBuilder};

/// 1K leaves summarized in groups of 10 into 100 roots.
fn build_two_level_index() -> TreeIndex {
    let store: Arc<dyn IDocStore> = Arc::new(InMemoryDocStore::new());
    let mut builder = TreeIndexBuilder::new(store);
    for i in 0..1000 {
        builder
            .add_node(Node::with_id(format!("leaf{i}"), format!("chunk {i}"), i), None)
            .unwrap();
    }
    for group in 0..100 {
        let children: Vec<String> = (0..10).map(|j| format!("leaf{}", group * 10 + j)).collect();
        let refs: Vec<&str> = children.iter().map(String::as_str).collect();
        // Reverse keys so the sort has work to do.
        builder
            .add_summary(
                Node::with_id(format!("sum{group}"), format!("summary {group}"), 99 - group),
                &refs,
            )
            .unwrap();
    }
    builder.build().unwrap()
}

fn bench_root_retrieval(c: &mut Criterion) {
    let index = build_two_level_index();
    let retriever = TreeRootRetriever::new(&index);
    let query = QueryBundle::new("what is this corpus about?");

    c.bench_function("root_retrieval_100_roots", |b| {
        b.iter(|| {
            retriever.retrieve(&query).unwrap();
        });
    });
}

fn bench_sorted_node_list(c: &mut Criterion) {
    let nodes: HashMap<String, Arc<Node>> = (0..1000)
        .map(|i| {
            let id = format!("n{i}");
            (id.clone(), Arc::new(Node::with_id(id, "t", 999 - i)))
        })
        .collect();

    c.bench_function("sorted_node_list_1k", |b| {
        b.iter(|| {
            sorted_node_list(nodes.clone(), OrderingPolicy::Strict).unwrap();
        });
    });
}

criterion_group!(benches, bench_root_retrieval, bench_sorted_node_list);
criterion_main!(benches);
