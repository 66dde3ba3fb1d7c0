// @generated from the Khronos OpenGL registry (gl.xml, core profile).
// Do not edit by hand; regenerate instead.

use crate::{core, ext, CapabilitySpec};

/// Known extension category suffixes (vendor and standards-body prefixes).
pub static CATEGORIES: &[&str] = &[
    "3DFX", "AMD", "ANGLE", "APPLE", "ARB", "ATI", "EXT", "IBM", "INTEL", "KHR", "MESA", "NV",
    "NVX", "OES", "OML", "SGI", "SGIS", "SGIX", "SUN", "WIN",
];

/// Every known capability: core versions in ascending order, then extensions.
pub static CAPABILITIES: &[CapabilitySpec] = &[
    core("GL_VERSION_1_1", 1, 1, Some("GL_VERSION_1_2"), &[]),
    core(
        "GL_VERSION_1_2",
        1,
        2,
        Some("GL_VERSION_1_3"),
        &[
            "glCopyTexSubImage3D", "glDrawRangeElements", "glTexImage3D", "glTexSubImage3D",
        ],
    ),
    core(
        "GL_VERSION_1_3",
        1,
        3,
        Some("GL_VERSION_1_4"),
        &[
            "glActiveTexture", "glCompressedTexImage1D", "glCompressedTexImage2D",
            "glCompressedTexImage3D", "glCompressedTexSubImage1D", "glCompressedTexSubImage2D",
            "glCompressedTexSubImage3D", "glGetCompressedTexImage", "glSampleCoverage",
        ],
    ),
    core(
        "GL_VERSION_1_4",
        1,
        4,
        Some("GL_VERSION_1_5"),
        &[
            "glBlendColor", "glBlendEquation", "glBlendFuncSeparate", "glMultiDrawArrays",
            "glMultiDrawElements", "glPointParameterf", "glPointParameterfv", "glPointParameteri",
            "glPointParameteriv",
        ],
    ),
    core(
        "GL_VERSION_1_5",
        1,
        5,
        Some("GL_VERSION_2_0"),
        &[
            "glBeginQuery", "glBindBuffer", "glBufferData", "glBufferSubData", "glDeleteBuffers",
            "glDeleteQueries", "glEndQuery", "glGenBuffers", "glGenQueries",
            "glGetBufferParameteriv", "glGetBufferPointerv", "glGetBufferSubData",
            "glGetQueryObjectiv", "glGetQueryObjectuiv", "glGetQueryiv", "glIsBuffer", "glIsQuery",
            "glMapBuffer", "glUnmapBuffer",
        ],
    ),
    core(
        "GL_VERSION_2_0",
        2,
        0,
        Some("GL_VERSION_2_1"),
        &[
            "glAttachShader", "glBindAttribLocation", "glBlendEquationSeparate", "glCompileShader",
            "glCreateProgram", "glCreateShader", "glDeleteProgram", "glDeleteShader",
            "glDetachShader", "glDisableVertexAttribArray", "glDrawBuffers",
            "glEnableVertexAttribArray", "glGetActiveAttrib", "glGetActiveUniform",
            "glGetAttachedShaders", "glGetAttribLocation", "glGetProgramInfoLog", "glGetProgramiv",
            "glGetShaderInfoLog", "glGetShaderSource", "glGetShaderiv", "glGetUniformLocation",
            "glGetUniformfv", "glGetUniformiv", "glGetVertexAttribPointerv", "glGetVertexAttribdv",
            "glGetVertexAttribfv", "glGetVertexAttribiv", "glIsProgram", "glIsShader",
            "glLinkProgram", "glShaderSource", "glStencilFuncSeparate", "glStencilMaskSeparate",
            "glStencilOpSeparate", "glUniform1f", "glUniform1fv", "glUniform1i", "glUniform1iv",
            "glUniform2f", "glUniform2fv", "glUniform2i", "glUniform2iv", "glUniform3f",
            "glUniform3fv", "glUniform3i", "glUniform3iv", "glUniform4f", "glUniform4fv",
            "glUniform4i", "glUniform4iv", "glUniformMatrix2fv", "glUniformMatrix3fv",
            "glUniformMatrix4fv", "glUseProgram", "glValidateProgram", "glVertexAttrib1d",
            "glVertexAttrib1dv", "glVertexAttrib1f", "glVertexAttrib1fv", "glVertexAttrib1s",
            "glVertexAttrib1sv", "glVertexAttrib2d", "glVertexAttrib2dv", "glVertexAttrib2f",
            "glVertexAttrib2fv", "glVertexAttrib2s", "glVertexAttrib2sv", "glVertexAttrib3d",
            "glVertexAttrib3dv", "glVertexAttrib3f", "glVertexAttrib3fv", "glVertexAttrib3s",
            "glVertexAttrib3sv", "glVertexAttrib4Nbv", "glVertexAttrib4Niv", "glVertexAttrib4Nsv",
            "glVertexAttrib4Nub", "glVertexAttrib4Nubv", "glVertexAttrib4Nuiv",
            "glVertexAttrib4Nusv", "glVertexAttrib4bv", "glVertexAttrib4d", "glVertexAttrib4dv",
            "glVertexAttrib4f", "glVertexAttrib4fv", "glVertexAttrib4iv", "glVertexAttrib4s",
            "glVertexAttrib4sv", "glVertexAttrib4ubv", "glVertexAttrib4uiv", "glVertexAttrib4usv",
            "glVertexAttribPointer",
        ],
    ),
    core(
        "GL_VERSION_2_1",
        2,
        1,
        Some("GL_VERSION_3_0"),
        &[
            "glUniformMatrix2x3fv", "glUniformMatrix2x4fv", "glUniformMatrix3x2fv",
            "glUniformMatrix3x4fv", "glUniformMatrix4x2fv", "glUniformMatrix4x3fv",
        ],
    ),
    core(
        "GL_VERSION_3_0",
        3,
        0,
        Some("GL_VERSION_3_1"),
        &[
            "glBeginConditionalRender", "glBeginTransformFeedback", "glBindBufferBase",
            "glBindBufferRange", "glBindFragDataLocation", "glBindFramebuffer",
            "glBindRenderbuffer", "glBindVertexArray", "glBlitFramebuffer",
            "glCheckFramebufferStatus", "glClampColor", "glClearBufferfi", "glClearBufferfv",
            "glClearBufferiv", "glClearBufferuiv", "glColorMaski", "glDeleteFramebuffers",
            "glDeleteRenderbuffers", "glDeleteVertexArrays", "glDisablei", "glEnablei",
            "glEndConditionalRender", "glEndTransformFeedback", "glFlushMappedBufferRange",
            "glFramebufferRenderbuffer", "glFramebufferTexture1D", "glFramebufferTexture2D",
            "glFramebufferTexture3D", "glFramebufferTextureLayer", "glGenFramebuffers",
            "glGenRenderbuffers", "glGenVertexArrays", "glGenerateMipmap", "glGetBooleani_v",
            "glGetFragDataLocation", "glGetFramebufferAttachmentParameteriv", "glGetIntegeri_v",
            "glGetRenderbufferParameteriv", "glGetStringi", "glGetTexParameterIiv",
            "glGetTexParameterIuiv", "glGetTransformFeedbackVarying", "glGetUniformuiv",
            "glGetVertexAttribIiv", "glGetVertexAttribIuiv", "glIsEnabledi", "glIsFramebuffer",
            "glIsRenderbuffer", "glIsVertexArray", "glMapBufferRange", "glRenderbufferStorage",
            "glRenderbufferStorageMultisample", "glTexParameterIiv", "glTexParameterIuiv",
            "glTransformFeedbackVaryings", "glUniform1ui", "glUniform1uiv", "glUniform2ui",
            "glUniform2uiv", "glUniform3ui", "glUniform3uiv", "glUniform4ui", "glUniform4uiv",
            "glVertexAttribI1i", "glVertexAttribI1iv", "glVertexAttribI1ui", "glVertexAttribI1uiv",
            "glVertexAttribI2i", "glVertexAttribI2iv", "glVertexAttribI2ui", "glVertexAttribI2uiv",
            "glVertexAttribI3i", "glVertexAttribI3iv", "glVertexAttribI3ui", "glVertexAttribI3uiv",
            "glVertexAttribI4bv", "glVertexAttribI4i", "glVertexAttribI4iv", "glVertexAttribI4sv",
            "glVertexAttribI4ubv", "glVertexAttribI4ui", "glVertexAttribI4uiv",
            "glVertexAttribI4usv", "glVertexAttribIPointer",
        ],
    ),
    core(
        "GL_VERSION_3_1",
        3,
        1,
        Some("GL_VERSION_3_2"),
        &[
            "glCopyBufferSubData", "glDrawArraysInstanced", "glDrawElementsInstanced",
            "glGetActiveUniformBlockName", "glGetActiveUniformBlockiv", "glGetActiveUniformName",
            "glGetActiveUniformsiv", "glGetUniformBlockIndex", "glGetUniformIndices",
            "glPrimitiveRestartIndex", "glTexBuffer", "glUniformBlockBinding",
        ],
    ),
    core(
        "GL_VERSION_3_2",
        3,
        2,
        Some("GL_VERSION_3_3"),
        &[
            "glClientWaitSync", "glDeleteSync", "glDrawElementsBaseVertex",
            "glDrawElementsInstancedBaseVertex", "glDrawRangeElementsBaseVertex", "glFenceSync",
            "glFramebufferTexture", "glGetBufferParameteri64v", "glGetInteger64i_v",
            "glGetInteger64v", "glGetMultisamplefv", "glGetSynciv", "glIsSync",
            "glMultiDrawElementsBaseVertex", "glProvokingVertex", "glSampleMaski",
            "glTexImage2DMultisample", "glTexImage3DMultisample", "glWaitSync",
        ],
    ),
    core(
        "GL_VERSION_3_3",
        3,
        3,
        Some("GL_VERSION_4_0"),
        &[
            "glBindFragDataLocationIndexed", "glBindSampler", "glDeleteSamplers",
            "glGenSamplers", "glGetFragDataIndex", "glGetQueryObjecti64v",
            "glGetQueryObjectui64v", "glGetSamplerParameterIiv", "glGetSamplerParameterIuiv",
            "glGetSamplerParameterfv", "glGetSamplerParameteriv", "glIsSampler", "glQueryCounter",
            "glSamplerParameterIiv", "glSamplerParameterIuiv", "glSamplerParameterf",
            "glSamplerParameterfv", "glSamplerParameteri", "glSamplerParameteriv",
            "glVertexAttribDivisor", "glVertexAttribP1ui", "glVertexAttribP1uiv",
            "glVertexAttribP2ui", "glVertexAttribP2uiv", "glVertexAttribP3ui",
            "glVertexAttribP3uiv", "glVertexAttribP4ui", "glVertexAttribP4uiv",
        ],
    ),
    core(
        "GL_VERSION_4_0",
        4,
        0,
        Some("GL_VERSION_4_1"),
        &[
            "glBeginQueryIndexed", "glBindTransformFeedback", "glBlendEquationSeparatei",
            "glBlendEquationi", "glBlendFuncSeparatei", "glBlendFunci",
            "glDeleteTransformFeedbacks", "glDrawArraysIndirect", "glDrawElementsIndirect",
            "glDrawTransformFeedback", "glDrawTransformFeedbackStream", "glEndQueryIndexed",
            "glGenTransformFeedbacks", "glGetActiveSubroutineName",
            "glGetActiveSubroutineUniformName", "glGetActiveSubroutineUniformiv",
            "glGetProgramStageiv", "glGetQueryIndexediv", "glGetSubroutineIndex",
            "glGetSubroutineUniformLocation", "glGetUniformSubroutineuiv", "glGetUniformdv",
            "glIsTransformFeedback", "glMinSampleShading", "glPatchParameterfv",
            "glPatchParameteri", "glPauseTransformFeedback", "glResumeTransformFeedback",
            "glUniform1d", "glUniform1dv", "glUniform2d", "glUniform2dv", "glUniform3d",
            "glUniform3dv", "glUniform4d", "glUniform4dv", "glUniformMatrix2dv",
            "glUniformMatrix2x3dv", "glUniformMatrix2x4dv", "glUniformMatrix3dv",
            "glUniformMatrix3x2dv", "glUniformMatrix3x4dv", "glUniformMatrix4dv",
            "glUniformMatrix4x2dv", "glUniformMatrix4x3dv", "glUniformSubroutinesuiv",
        ],
    ),
    core(
        "GL_VERSION_4_1",
        4,
        1,
        Some("GL_VERSION_4_2"),
        &[
            "glActiveShaderProgram", "glBindProgramPipeline", "glClearDepthf",
            "glCreateShaderProgramv", "glDeleteProgramPipelines", "glDepthRangeArrayv",
            "glDepthRangeIndexed", "glDepthRangef", "glGenProgramPipelines", "glGetDoublei_v",
            "glGetFloati_v", "glGetProgramBinary", "glGetProgramPipelineInfoLog",
            "glGetProgramPipelineiv", "glGetShaderPrecisionFormat", "glGetVertexAttribLdv",
            "glIsProgramPipeline", "glProgramBinary", "glProgramParameteri", "glProgramUniform1d",
            "glProgramUniform1dv", "glProgramUniform1f", "glProgramUniform1fv",
            "glProgramUniform1i", "glProgramUniform1iv", "glProgramUniform1ui",
            "glProgramUniform1uiv", "glProgramUniform2d", "glProgramUniform2dv",
            "glProgramUniform2f", "glProgramUniform2fv", "glProgramUniform2i",
            "glProgramUniform2iv", "glProgramUniform2ui", "glProgramUniform2uiv",
            "glProgramUniform3d", "glProgramUniform3dv", "glProgramUniform3f",
            "glProgramUniform3fv", "glProgramUniform3i", "glProgramUniform3iv",
            "glProgramUniform3ui", "glProgramUniform3uiv", "glProgramUniform4d",
            "glProgramUniform4dv", "glProgramUniform4f", "glProgramUniform4fv",
            "glProgramUniform4i", "glProgramUniform4iv", "glProgramUniform4ui",
            "glProgramUniform4uiv", "glProgramUniformMatrix2dv", "glProgramUniformMatrix2fv",
            "glProgramUniformMatrix2x3dv", "glProgramUniformMatrix2x3fv",
            "glProgramUniformMatrix2x4dv", "glProgramUniformMatrix2x4fv",
            "glProgramUniformMatrix3dv", "glProgramUniformMatrix3fv",
            "glProgramUniformMatrix3x2dv", "glProgramUniformMatrix3x2fv",
            "glProgramUniformMatrix3x4dv", "glProgramUniformMatrix3x4fv",
            "glProgramUniformMatrix4dv", "glProgramUniformMatrix4fv",
            "glProgramUniformMatrix4x2dv", "glProgramUniformMatrix4x2fv",
            "glProgramUniformMatrix4x3dv", "glProgramUniformMatrix4x3fv",
            "glReleaseShaderCompiler", "glScissorArrayv", "glScissorIndexed", "glScissorIndexedv",
            "glShaderBinary", "glUseProgramStages", "glValidateProgramPipeline",
            "glVertexAttribL1d", "glVertexAttribL1dv", "glVertexAttribL2d", "glVertexAttribL2dv",
            "glVertexAttribL3d", "glVertexAttribL3dv", "glVertexAttribL4d", "glVertexAttribL4dv",
            "glVertexAttribLPointer", "glViewportArrayv", "glViewportIndexedf",
            "glViewportIndexedfv",
        ],
    ),
    core(
        "GL_VERSION_4_2",
        4,
        2,
        Some("GL_VERSION_4_3"),
        &[
            "glBindImageTexture", "glDrawArraysInstancedBaseInstance",
            "glDrawElementsInstancedBaseInstance", "glDrawElementsInstancedBaseVertexBaseInstance",
            "glDrawTransformFeedbackInstanced", "glDrawTransformFeedbackStreamInstanced",
            "glGetActiveAtomicCounterBufferiv", "glGetInternalformativ", "glMemoryBarrier",
            "glTexStorage1D", "glTexStorage2D", "glTexStorage3D",
        ],
    ),
    core(
        "GL_VERSION_4_3",
        4,
        3,
        Some("GL_VERSION_4_4"),
        &[
            "glBindVertexBuffer", "glClearBufferData", "glClearBufferSubData",
            "glCopyImageSubData", "glDebugMessageCallback", "glDebugMessageControl",
            "glDebugMessageInsert", "glDispatchCompute", "glDispatchComputeIndirect",
            "glFramebufferParameteri", "glGetDebugMessageLog", "glGetFramebufferParameteriv",
            "glGetInternalformati64v", "glGetObjectLabel", "glGetObjectPtrLabel",
            "glGetProgramInterfaceiv", "glGetProgramResourceIndex", "glGetProgramResourceLocation",
            "glGetProgramResourceLocationIndex", "glGetProgramResourceName",
            "glGetProgramResourceiv", "glInvalidateBufferData", "glInvalidateBufferSubData",
            "glInvalidateFramebuffer", "glInvalidateSubFramebuffer", "glInvalidateTexImage",
            "glInvalidateTexSubImage", "glMultiDrawArraysIndirect", "glMultiDrawElementsIndirect",
            "glObjectLabel", "glObjectPtrLabel", "glPopDebugGroup", "glPushDebugGroup",
            "glShaderStorageBlockBinding", "glTexBufferRange", "glTexStorage2DMultisample",
            "glTexStorage3DMultisample", "glTextureView", "glVertexAttribBinding",
            "glVertexAttribFormat", "glVertexAttribIFormat", "glVertexAttribLFormat",
            "glVertexBindingDivisor",
        ],
    ),
    core(
        "GL_VERSION_4_4",
        4,
        4,
        Some("GL_VERSION_4_5"),
        &[
            "glBindBuffersBase", "glBindBuffersRange", "glBindImageTextures", "glBindSamplers",
            "glBindTextures", "glBindVertexBuffers", "glBufferStorage", "glClearTexImage",
            "glClearTexSubImage",
        ],
    ),
    core(
        "GL_VERSION_4_5",
        4,
        5,
        Some("GL_VERSION_4_6"),
        &[
            "glBindTextureUnit", "glBlitNamedFramebuffer", "glCheckNamedFramebufferStatus",
            "glClearNamedBufferData", "glClearNamedBufferSubData", "glClearNamedFramebufferfi",
            "glClearNamedFramebufferfv", "glClearNamedFramebufferiv", "glClearNamedFramebufferuiv",
            "glClipControl", "glCompressedTextureSubImage1D", "glCompressedTextureSubImage2D",
            "glCompressedTextureSubImage3D", "glCopyNamedBufferSubData", "glCopyTextureSubImage1D",
            "glCopyTextureSubImage2D", "glCopyTextureSubImage3D", "glCreateBuffers",
            "glCreateFramebuffers", "glCreateProgramPipelines", "glCreateQueries",
            "glCreateRenderbuffers", "glCreateSamplers", "glCreateTextures",
            "glCreateTransformFeedbacks", "glCreateVertexArrays", "glDisableVertexArrayAttrib",
            "glEnableVertexArrayAttrib", "glFlushMappedNamedBufferRange",
            "glGenerateTextureMipmap", "glGetCompressedTextureImage",
            "glGetCompressedTextureSubImage", "glGetGraphicsResetStatus",
            "glGetNamedBufferParameteri64v", "glGetNamedBufferParameteriv",
            "glGetNamedBufferPointerv", "glGetNamedBufferSubData",
            "glGetNamedFramebufferAttachmentParameteriv", "glGetNamedFramebufferParameteriv",
            "glGetNamedRenderbufferParameteriv", "glGetQueryBufferObjecti64v",
            "glGetQueryBufferObjectiv", "glGetQueryBufferObjectui64v", "glGetQueryBufferObjectuiv",
            "glGetTextureImage", "glGetTextureLevelParameterfv", "glGetTextureLevelParameteriv",
            "glGetTextureParameterIiv", "glGetTextureParameterIuiv", "glGetTextureParameterfv",
            "glGetTextureParameteriv", "glGetTextureSubImage", "glGetTransformFeedbacki64_v",
            "glGetTransformFeedbacki_v", "glGetTransformFeedbackiv", "glGetVertexArrayIndexed64iv",
            "glGetVertexArrayIndexediv", "glGetVertexArrayiv", "glGetnCompressedTexImage",
            "glGetnTexImage", "glGetnUniformdv", "glGetnUniformfv", "glGetnUniformiv",
            "glGetnUniformuiv", "glInvalidateNamedFramebufferData",
            "glInvalidateNamedFramebufferSubData", "glMapNamedBuffer", "glMapNamedBufferRange",
            "glMemoryBarrierByRegion", "glNamedBufferData", "glNamedBufferStorage",
            "glNamedBufferSubData", "glNamedFramebufferDrawBuffer",
            "glNamedFramebufferDrawBuffers", "glNamedFramebufferParameteri",
            "glNamedFramebufferReadBuffer", "glNamedFramebufferRenderbuffer",
            "glNamedFramebufferTexture", "glNamedFramebufferTextureLayer",
            "glNamedRenderbufferStorage", "glNamedRenderbufferStorageMultisample", "glReadnPixels",
            "glTextureBarrier", "glTextureBuffer", "glTextureBufferRange", "glTextureParameterIiv",
            "glTextureParameterIuiv", "glTextureParameterf", "glTextureParameterfv",
            "glTextureParameteri", "glTextureParameteriv", "glTextureStorage1D",
            "glTextureStorage2D", "glTextureStorage2DMultisample", "glTextureStorage3D",
            "glTextureStorage3DMultisample", "glTextureSubImage1D", "glTextureSubImage2D",
            "glTextureSubImage3D", "glTransformFeedbackBufferBase",
            "glTransformFeedbackBufferRange", "glUnmapNamedBuffer", "glVertexArrayAttribBinding",
            "glVertexArrayAttribFormat", "glVertexArrayAttribIFormat", "glVertexArrayAttribLFormat",
            "glVertexArrayBindingDivisor", "glVertexArrayElementBuffer",
            "glVertexArrayVertexBuffer", "glVertexArrayVertexBuffers",
        ],
    ),
    core(
        "GL_VERSION_4_6",
        4,
        6,
        None,
        &[
            "glMultiDrawArraysIndirectCount", "glMultiDrawElementsIndirectCount",
            "glPolygonOffsetClamp", "glSpecializeShader",
        ],
    ),
    ext(
        "GL_APPLE_vertex_array_object",
        &[
            "glBindVertexArrayAPPLE", "glDeleteVertexArraysAPPLE", "glGenVertexArraysAPPLE",
            "glIsVertexArrayAPPLE",
        ],
    ),
    ext("GL_ARB_ES2_compatibility", &[
        "glClearDepthf", "glDepthRangef", "glGetShaderPrecisionFormat", "glReleaseShaderCompiler",
        "glShaderBinary",
    ]),
    ext("GL_ARB_buffer_storage", &["glBufferStorage"]),
    ext("GL_ARB_clip_control", &["glClipControl"]),
    ext("GL_ARB_compute_shader", &["glDispatchCompute", "glDispatchComputeIndirect"]),
    ext("GL_ARB_conservative_depth", &[]),
    ext("GL_ARB_copy_buffer", &["glCopyBufferSubData"]),
    ext(
        "GL_ARB_debug_output",
        &[
            "glDebugMessageCallbackARB", "glDebugMessageControlARB", "glDebugMessageInsertARB",
            "glGetDebugMessageLogARB",
        ],
    ),
    ext("GL_ARB_depth_clamp", &[]),
    ext("GL_ARB_draw_instanced", &["glDrawArraysInstancedARB", "glDrawElementsInstancedARB"]),
    ext("GL_ARB_explicit_attrib_location", &[]),
    ext(
        "GL_ARB_framebuffer_object",
        &[
            "glBindFramebuffer", "glBindRenderbuffer", "glBlitFramebuffer",
            "glCheckFramebufferStatus", "glDeleteFramebuffers", "glDeleteRenderbuffers",
            "glFramebufferRenderbuffer", "glFramebufferTexture1D", "glFramebufferTexture2D",
            "glFramebufferTexture3D", "glFramebufferTextureLayer", "glGenFramebuffers",
            "glGenRenderbuffers", "glGenerateMipmap", "glGetFramebufferAttachmentParameteriv",
            "glGetRenderbufferParameteriv", "glIsFramebuffer", "glIsRenderbuffer",
            "glRenderbufferStorage", "glRenderbufferStorageMultisample",
        ],
    ),
    ext("GL_ARB_get_program_binary", &[
        "glGetProgramBinary", "glProgramBinary", "glProgramParameteri",
    ]),
    ext("GL_ARB_instanced_arrays", &["glVertexAttribDivisorARB"]),
    ext("GL_ARB_internalformat_query", &["glGetInternalformativ"]),
    ext(
        "GL_ARB_invalidate_subdata",
        &[
            "glInvalidateBufferData", "glInvalidateBufferSubData", "glInvalidateFramebuffer",
            "glInvalidateSubFramebuffer", "glInvalidateTexImage", "glInvalidateTexSubImage",
        ],
    ),
    ext("GL_ARB_map_buffer_range", &["glFlushMappedBufferRange", "glMapBufferRange"]),
    ext("GL_ARB_multisample", &["glSampleCoverageARB"]),
    ext(
        "GL_ARB_multitexture",
        &[
            "glActiveTextureARB", "glClientActiveTextureARB", "glMultiTexCoord1dARB",
            "glMultiTexCoord1dvARB", "glMultiTexCoord1fARB", "glMultiTexCoord1fvARB",
            "glMultiTexCoord1iARB", "glMultiTexCoord1ivARB", "glMultiTexCoord1sARB",
            "glMultiTexCoord1svARB", "glMultiTexCoord2dARB", "glMultiTexCoord2dvARB",
            "glMultiTexCoord2fARB", "glMultiTexCoord2fvARB", "glMultiTexCoord2iARB",
            "glMultiTexCoord2ivARB", "glMultiTexCoord2sARB", "glMultiTexCoord2svARB",
            "glMultiTexCoord3dARB", "glMultiTexCoord3dvARB", "glMultiTexCoord3fARB",
            "glMultiTexCoord3fvARB", "glMultiTexCoord3iARB", "glMultiTexCoord3ivARB",
            "glMultiTexCoord3sARB", "glMultiTexCoord3svARB", "glMultiTexCoord4dARB",
            "glMultiTexCoord4dvARB", "glMultiTexCoord4fARB", "glMultiTexCoord4fvARB",
            "glMultiTexCoord4iARB", "glMultiTexCoord4ivARB", "glMultiTexCoord4sARB",
            "glMultiTexCoord4svARB",
        ],
    ),
    ext(
        "GL_ARB_occlusion_query",
        &[
            "glBeginQueryARB", "glDeleteQueriesARB", "glEndQueryARB", "glGenQueriesARB",
            "glGetQueryObjectivARB", "glGetQueryObjectuivARB", "glGetQueryivARB", "glIsQueryARB",
        ],
    ),
    ext("GL_ARB_point_parameters", &["glPointParameterfARB", "glPointParameterfvARB"]),
    ext(
        "GL_ARB_sampler_objects",
        &[
            "glBindSampler", "glDeleteSamplers", "glGenSamplers", "glGetSamplerParameterIiv",
            "glGetSamplerParameterIuiv", "glGetSamplerParameterfv", "glGetSamplerParameteriv",
            "glIsSampler", "glSamplerParameterIiv", "glSamplerParameterIuiv", "glSamplerParameterf",
            "glSamplerParameterfv", "glSamplerParameteri", "glSamplerParameteriv",
        ],
    ),
    ext("GL_ARB_seamless_cube_map", &[]),
    ext(
        "GL_ARB_sync",
        &[
            "glClientWaitSync", "glDeleteSync", "glFenceSync", "glGetInteger64v", "glGetSynciv",
            "glIsSync", "glWaitSync",
        ],
    ),
    ext("GL_ARB_tessellation_shader", &["glPatchParameterfv", "glPatchParameteri"]),
    ext(
        "GL_ARB_texture_compression",
        &[
            "glCompressedTexImage1DARB", "glCompressedTexImage2DARB", "glCompressedTexImage3DARB",
            "glCompressedTexSubImage1DARB", "glCompressedTexSubImage2DARB",
            "glCompressedTexSubImage3DARB", "glGetCompressedTexImageARB",
        ],
    ),
    ext("GL_ARB_texture_cube_map", &[]),
    ext("GL_ARB_texture_float", &[]),
    ext(
        "GL_ARB_texture_multisample",
        &[
            "glGetMultisamplefv", "glSampleMaski", "glTexImage2DMultisample",
            "glTexImage3DMultisample",
        ],
    ),
    ext("GL_ARB_texture_non_power_of_two", &[]),
    ext("GL_ARB_texture_rg", &[]),
    ext("GL_ARB_texture_storage", &["glTexStorage1D", "glTexStorage2D", "glTexStorage3D"]),
    ext("GL_ARB_timer_query", &[
        "glGetQueryObjecti64v", "glGetQueryObjectui64v", "glQueryCounter",
    ]),
    ext(
        "GL_ARB_transpose_matrix",
        &[
            "glLoadTransposeMatrixdARB", "glLoadTransposeMatrixfARB", "glMultTransposeMatrixdARB",
            "glMultTransposeMatrixfARB",
        ],
    ),
    ext(
        "GL_ARB_uniform_buffer_object",
        &[
            "glBindBufferBase", "glBindBufferRange", "glGetActiveUniformBlockName",
            "glGetActiveUniformBlockiv", "glGetActiveUniformName", "glGetActiveUniformsiv",
            "glGetIntegeri_v", "glGetUniformBlockIndex", "glGetUniformIndices",
            "glUniformBlockBinding",
        ],
    ),
    ext("GL_ARB_vertex_array_bgra", &[]),
    ext(
        "GL_ARB_vertex_array_object",
        &[
            "glBindVertexArray", "glDeleteVertexArrays", "glGenVertexArrays", "glIsVertexArray",
        ],
    ),
    ext(
        "GL_ARB_vertex_buffer_object",
        &[
            "glBindBufferARB", "glBufferDataARB", "glBufferSubDataARB", "glDeleteBuffersARB",
            "glGenBuffersARB", "glGetBufferParameterivARB", "glGetBufferPointervARB",
            "glGetBufferSubDataARB", "glIsBufferARB", "glMapBufferARB", "glUnmapBufferARB",
        ],
    ),
    ext(
        "GL_ARB_viewport_array",
        &[
            "glDepthRangeArrayv", "glDepthRangeIndexed", "glGetDoublei_v", "glGetFloati_v",
            "glScissorArrayv", "glScissorIndexed", "glScissorIndexedv", "glViewportArrayv",
            "glViewportIndexedf", "glViewportIndexedfv",
        ],
    ),
    ext("GL_ATI_meminfo", &[]),
    ext("GL_ATI_separate_stencil", &["glStencilFuncSeparateATI", "glStencilOpSeparateATI"]),
    ext("GL_EXT_blend_func_separate", &["glBlendFuncSeparateEXT"]),
    ext("GL_EXT_blend_minmax", &["glBlendEquationEXT"]),
    ext("GL_EXT_draw_range_elements", &["glDrawRangeElementsEXT"]),
    ext(
        "GL_EXT_framebuffer_object",
        &[
            "glBindFramebufferEXT", "glBindRenderbufferEXT", "glCheckFramebufferStatusEXT",
            "glDeleteFramebuffersEXT", "glDeleteRenderbuffersEXT", "glFramebufferRenderbufferEXT",
            "glFramebufferTexture1DEXT", "glFramebufferTexture2DEXT", "glFramebufferTexture3DEXT",
            "glGenFramebuffersEXT", "glGenRenderbuffersEXT", "glGenerateMipmapEXT",
            "glGetFramebufferAttachmentParameterivEXT", "glGetRenderbufferParameterivEXT",
            "glIsFramebufferEXT", "glIsRenderbufferEXT", "glRenderbufferStorageEXT",
        ],
    ),
    ext("GL_EXT_point_parameters", &["glPointParameterfEXT", "glPointParameterfvEXT"]),
    ext("GL_EXT_texture_compression_s3tc", &[]),
    ext("GL_EXT_texture_filter_anisotropic", &[]),
    ext("GL_EXT_texture_sRGB", &[]),
    ext(
        "GL_KHR_debug",
        &[
            "glDebugMessageCallback", "glDebugMessageControl", "glDebugMessageInsert",
            "glGetDebugMessageLog", "glGetObjectLabel", "glGetObjectPtrLabel", "glGetPointerv",
            "glObjectLabel", "glObjectPtrLabel", "glPopDebugGroup", "glPushDebugGroup",
        ],
    ),
    ext("GL_KHR_texture_compression_astc_ldr", &[]),
    ext("GL_NV_conditional_render", &["glBeginConditionalRenderNV", "glEndConditionalRenderNV"]),
    ext(
        "GL_NV_fence",
        &[
            "glDeleteFencesNV", "glFinishFenceNV", "glGenFencesNV", "glGetFenceivNV", "glIsFenceNV",
            "glSetFenceNV", "glTestFenceNV",
        ],
    ),
    ext("GL_NVX_gpu_memory_info", &[]),
];
