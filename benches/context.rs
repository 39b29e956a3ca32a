#![allow(dead_code)]

use beanery::{upcast, Catalog, ComponentDescriptor, Config, Context, Inject};
use criterion::{criterion_group, criterion_main, Criterion};
use std::sync::Arc;

trait Client: Send + Sync {}

struct A(Arc<B>, Arc<C>);
struct B(i32);
struct C(Arc<CA>);
struct CA(Arc<CAA>);
struct CAA(Arc<CAAA>);
struct CAAA(Arc<dyn Client>);
struct CAAAA;

impl Client for CAAAA {}

#[inline]
fn catalog() -> Catalog {
    Catalog::new()
        .component(
            ComponentDescriptor::of::<A>("bench::a")
                .constructor(|Inject(b): Inject<B>, Inject(c): Inject<C>| Ok(A(b, c))),
        )
        .component(ComponentDescriptor::of::<B>("bench::b").constructor(|| Ok(B(2))))
        .component(ComponentDescriptor::of::<C>("bench::c").constructor(|Inject(ca): Inject<CA>| Ok(C(ca))))
        .component(ComponentDescriptor::of::<CA>("bench::c::a").constructor(|Inject(caa): Inject<CAA>| Ok(CA(caa))))
        .component(ComponentDescriptor::of::<CAA>("bench::c::a::a").constructor(|Inject(caaa): Inject<CAAA>| Ok(CAA(caaa))))
        .component(
            ComponentDescriptor::of::<CAAA>("bench::c::a::a::a")
                .constructor(|Inject(client): Inject<dyn Client>| Ok(CAAA(client))),
        )
        .component(
            ComponentDescriptor::of::<CAAAA>("bench::c::a::a::a::a")
                .constructor(|| Ok(CAAAA))
                .implements::<dyn Client>(upcast!(dyn Client)),
        )
}

#[inline]
fn context_get(context: &Context) {
    let _ = context.get::<A>().unwrap();
}

#[inline]
fn context_get_capability(context: &Context) {
    let _ = context.get::<dyn Client>().unwrap();
}

#[inline]
fn context_get_by_name(context: &Context) {
    let _ = context.get_by_name::<dyn Client>("cAAAA").unwrap();
}

fn criterion_benchmark(c: &mut Criterion) {
    let catalog = catalog();
    let config = Config::new().base_package("bench");
    let context = Context::new(&catalog, &config).unwrap();

    c.bench_function("context_new", |b| b.iter(|| Context::new(&catalog, &config).unwrap()))
        .bench_function("context_get", |b| b.iter(|| context_get(&context)))
        .bench_function("context_get_capability", |b| b.iter(|| context_get_capability(&context)))
        .bench_function("context_get_by_name", |b| b.iter(|| context_get_by_name(&context)));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
