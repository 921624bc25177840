//! 通讯录记录类型定义

use serde::{Deserialize, Serialize};

/// 通讯录记录
///
/// 除了在列表中的位置之外没有其他标识。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// 姓名
    pub name: String,
    /// 州
    pub state: String,
    /// 电话，格式 `(212) 555 - 1234`
    pub phone: String,
}

impl Record {
    /// 创建新记录
    #[must_use]
    pub fn new(name: impl Into<String>, state: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: state.into(),
            phone: phone.into(),
        }
    }

    /// 读取指定字段
    #[must_use]
    pub fn field(&self, field: RecordField) -> &str {
        match field {
            RecordField::Name => &self.name,
            RecordField::State => &self.state,
            RecordField::Phone => &self.phone,
        }
    }

    /// 获取指定字段的可变引用（表单编辑使用）
    pub fn field_mut(&mut self, field: RecordField) -> &mut String {
        match field {
            RecordField::Name => &mut self.name,
            RecordField::State => &mut self.state,
            RecordField::Phone => &mut self.phone,
        }
    }
}

/// 记录字段
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RecordField {
    #[default]
    Name,
    State,
    Phone,
}

impl RecordField {
    /// 表单中的字段顺序，同时也是校验顺序
    pub const ALL: [Self; 3] = [Self::Name, Self::State, Self::Phone];

    /// 字段标签
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::State => "State",
            Self::Phone => "Phone",
        }
    }

    /// XML 元素名
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::State => "state",
            Self::Phone => "phone",
        }
    }

    /// 校验失败时展示给用户的消息
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Name => {
                "Invalid Name. Names should start with an uppercase letter followed by at least two characters"
            }
            Self::State => "Invalid State. States should consist of one or two words",
            Self::Phone => "Invalid Phone number. Ex (212) 555 - 1234",
        }
    }

    /// 表单中的下一个字段（循环）
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::State,
            Self::State => Self::Phone,
            Self::Phone => Self::Name,
        }
    }

    /// 表单中的上一个字段（循环）
    #[must_use]
    pub fn previous(self) -> Self {
        match self {
            Self::Name => Self::Phone,
            Self::State => Self::Name,
            Self::Phone => Self::State,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_accessors_follow_field() {
        let mut record = Record::new("John Smith", "New York", "(212) 555 - 1234");
        assert_eq!(record.field(RecordField::State), "New York");

        record.field_mut(RecordField::Phone).push('9');
        assert_eq!(record.phone, "(212) 555 - 12349");
    }

    #[test]
    fn field_cycle_wraps_around() {
        assert_eq!(RecordField::Phone.next(), RecordField::Name);
        assert_eq!(RecordField::Name.previous(), RecordField::Phone);
        for field in RecordField::ALL {
            assert_eq!(field.next().previous(), field);
        }
    }
}
