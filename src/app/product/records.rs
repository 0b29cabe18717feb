//! 产品集合上的基本操作
//!
//! 每次请求都会重新加载整个集合，这里的函数只处理内存中的快照。

use super::model::{Product, ProductPatch};

/// 下一个可用 id：现有最大 id + 1，集合为空时为 1；最大 id 已到 `u64::MAX` 时为 `None`
pub fn next_id(products: &[Product]) -> Option<u64> {
    match products.iter().map(|product| product.id).max() {
        Some(max) => max.checked_add(1),
        None => Some(1),
    }
}

pub fn find_by_id(products: &[Product], id: u64) -> Option<&Product> {
    products.iter().find(|product| product.id == id)
}

pub fn insert_at_end(products: &mut Vec<Product>, product: Product) {
    products.push(product);
}

/// 把 patch 合并到第一条匹配的记录上，返回合并后的记录
pub fn replace_by_id(products: &mut [Product], id: u64, patch: ProductPatch) -> Option<&Product> {
    let product = products.iter_mut().find(|product| product.id == id)?;
    patch.apply_to(product);
    Some(&*product)
}

/// 删除所有匹配的记录，返回删除的数量
pub fn remove_by_id(products: &mut Vec<Product>, id: u64) -> usize {
    let before = products.len();
    products.retain(|product| product.id != id);
    before - products.len()
}
