//! HTML处理模块
//!
//! 提供HTML解析和按标签/属性查询元素的能力。
//! 抓取逻辑只依赖这里的`HtmlDocument`/`Element`，不直接接触DOM节点。

// 标准库导入
use std::fmt;

// 第三方crate导入
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

// 本地模块导入
use crate::error::Result;
use crate::translation_error;

/// 元素属性过滤条件
#[derive(Debug, Clone, Copy)]
pub enum AttrFilter<'a> {
    /// 不过滤属性，只按标签匹配
    Any,
    /// `id`属性完全相等
    Id(&'a str),
    /// `class`中任意一个类名命中列表中任意一项
    Class(&'a [&'a str]),
}

/// 解析后的HTML文档
pub struct HtmlDocument {
    dom: RcDom,
}

impl HtmlDocument {
    /// 解析HTML字符串
    pub fn parse(html: &str) -> Result<Self> {
        let dom = parse_document(RcDom::default(), Default::default())
            .from_utf8()
            .read_from(&mut html.as_bytes())
            .map_err(|e| translation_error!(html_parse, format!("HTML解析失败: {}", e)))?;
        Ok(Self { dom })
    }

    /// 文档根节点
    pub fn root(&self) -> Element {
        Element {
            handle: self.dom.document.clone(),
        }
    }

    /// 在整个文档中查找元素
    pub fn find_all(&self, tag: &str, filter: AttrFilter<'_>) -> Vec<Element> {
        self.root().find_all(tag, filter)
    }

    /// 在整个文档中查找第一个匹配的元素
    pub fn find(&self, tag: &str, filter: AttrFilter<'_>) -> Option<Element> {
        self.root().find(tag, filter)
    }
}

/// DOM元素的只读视图
#[derive(Clone)]
pub struct Element {
    handle: Handle,
}

impl Element {
    /// 标签名（文档节点、文本节点返回None）
    pub fn tag_name(&self) -> Option<String> {
        match self.handle.data {
            NodeData::Element { ref name, .. } => Some(name.local.as_ref().to_string()),
            _ => None,
        }
    }

    /// 按文档顺序查找所有匹配的后代元素
    pub fn find_all(&self, tag: &str, filter: AttrFilter<'_>) -> Vec<Element> {
        self.descendants()
            .into_iter()
            .filter(|node| matches_element(node, tag, filter))
            .map(|handle| Element { handle })
            .collect()
    }

    /// 查找第一个匹配的后代元素
    pub fn find(&self, tag: &str, filter: AttrFilter<'_>) -> Option<Element> {
        self.descendants()
            .into_iter()
            .find(|node| matches_element(node, tag, filter))
            .map(|handle| Element { handle })
    }

    /// 读取属性值
    pub fn attribute(&self, name: &str) -> Option<String> {
        match self.handle.data {
            NodeData::Element { ref attrs, .. } => attrs
                .borrow()
                .iter()
                .find(|attr| attr.name.local.as_ref() == name)
                .map(|attr| attr.value.to_string()),
            _ => None,
        }
    }

    /// 拼接所有后代文本节点的内容
    pub fn text(&self) -> String {
        let mut text = String::new();
        for node in self.descendants() {
            if let NodeData::Text { ref contents } = node.data {
                text.push_str(&contents.borrow());
            }
        }
        text
    }

    /// 去掉首尾空白的文本内容
    pub fn trimmed_text(&self) -> String {
        self.text().trim().to_string()
    }

    /// 先序遍历的后代节点（即文档顺序），不包含自身
    fn descendants(&self) -> Vec<Handle> {
        let mut nodes = Vec::new();
        let mut stack: Vec<Handle> = self.handle.children.borrow().iter().rev().cloned().collect();

        while let Some(node) = stack.pop() {
            stack.extend(node.children.borrow().iter().rev().cloned());
            nodes.push(node);
        }

        nodes
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("tag", &self.tag_name())
            .finish()
    }
}

/// 判断节点是否为匹配标签和属性条件的元素
fn matches_element(node: &Handle, tag: &str, filter: AttrFilter<'_>) -> bool {
    let NodeData::Element { ref name, ref attrs, .. } = node.data else {
        return false;
    };

    if !name.local.as_ref().eq_ignore_ascii_case(tag) {
        return false;
    }

    let attrs = attrs.borrow();
    let value_of = |key: &str| {
        attrs
            .iter()
            .find(|attr| attr.name.local.as_ref() == key)
            .map(|attr| attr.value.to_string())
    };

    match filter {
        AttrFilter::Any => true,
        AttrFilter::Id(id) => value_of("id").as_deref() == Some(id),
        AttrFilter::Class(classes) => value_of("class")
            .map(|value| value.split_whitespace().any(|class| classes.contains(&class)))
            .unwrap_or(false),
    }
}
