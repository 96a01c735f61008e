use crate::variant::TemplateRef;

pub const BASE: TemplateRef = TemplateRef("next-gen/base");
pub const RULES: TemplateRef = TemplateRef("next-gen/rules");
pub const TOOL_USE: TemplateRef = TemplateRef("next-gen/tool-use");
pub const OBJECTIVE: TemplateRef = TemplateRef("next-gen/objective");
pub const ACT_VS_PLAN: TemplateRef = TemplateRef("next-gen/act-vs-plan");
pub const FEEDBACK: TemplateRef = TemplateRef("next-gen/feedback");
